//! User session handling: the store, its collaborators, and their errors.

mod error;
mod services;
mod storage;
mod store;

#[cfg(test)]
mod store_test;

pub use error::SessionError;
pub use services::{LoginService, TokenHolder, UserService};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
pub use store::{SessionServices, SessionStore};
