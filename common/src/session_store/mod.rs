//! Persisted storage for the signed-in user's session

pub mod file;
pub mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use crate::error::Result;
use crate::session::Session;
use std::fmt::Debug;

/// Storage key the session lives under
pub const SESSION_KEY: &str = "user";

/// Injected into the API client instead of a process global.
///
/// Read before every request, written by login and logout flows.
pub trait SessionStore: Debug + Send + Sync {
    /// Current session, `None` before the first login or after logout
    fn get(&self) -> Option<Session>;

    fn set(&self, session: Session) -> Result<()>;

    /// Remove the session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}
