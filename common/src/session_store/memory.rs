use super::SessionStore;
use crate::error::Result;
use crate::session::Session;
use parking_lot::RwLock;

/// Process-local store, for tests and short-lived embedders
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.session.read().clone()
    }

    fn set(&self, session: Session) -> Result<()> {
        *self.session.write() = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.session.write().take();
        Ok(())
    }
}
