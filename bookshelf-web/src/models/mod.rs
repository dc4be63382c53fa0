pub mod session_state;

pub use session_state::{AsyncPhase, RequestStatus, SessionEvent, SessionState};
