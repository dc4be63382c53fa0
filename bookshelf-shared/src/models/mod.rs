//! Wire models exchanged between the Bookshelf web client and its backend.

pub mod errors;
pub mod user;

pub use errors::{ErrorResponse, ValidationError};
pub use user::{CreatedUser, Credentials, NewUser, SessionUser};
