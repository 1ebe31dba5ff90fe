// Service exports
pub mod session;

pub use session::{SessionError, SessionState, SessionStore};
