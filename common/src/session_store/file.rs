use super::{SESSION_KEY, SessionStore};
use crate::error::{CommonError, Result};
use crate::session::Session;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key/value JSON document on disk, the native stand-in for browser local storage.
///
/// The session is stored under [`SESSION_KEY`]; other keys in the document
/// are preserved. A missing file means no session.
///
/// Reads and writes are synchronous `std::fs` calls, also when reached from
/// async request code: the document holds a single small record.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(document) => Ok(document),
            _ => Err(CommonError::Store(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<Session> {
        let document = match self.read_document() {
            Ok(document) => document,
            Err(e) => {
                warn!("Failed to read session store {}: {}", self.path.display(), e);
                return None;
            }
        };

        match document.get(SESSION_KEY).cloned() {
            None | Some(Value::Null) => None,
            Some(value) => match serde_json::from_value(value) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!("Ignoring malformed session in {}: {}", self.path.display(), e);
                    None
                }
            },
        }
    }

    fn set(&self, session: Session) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut document = self.read_document().unwrap_or_default();
        document.insert(SESSION_KEY.to_string(), serde_json::to_value(&session)?);
        self.write_document(&document)?;
        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(e) => {
                warn!("Discarding unreadable session store {}: {}", self.path.display(), e);
                Map::new()
            }
        };
        if document.remove(SESSION_KEY).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_document(&document)?;
        debug!("Session removed from {}", self.path.display());
        Ok(())
    }
}
