use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Credential of the signed-in user as issued by the backend sign-in flow.
///
/// Fields the client does not know about are kept verbatim so the record
/// sent back on logout matches what was stored.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "fName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(rename = "lName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_name(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Token usable in an `Authorization` header, `None` when blank
    pub fn bearer_token(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }

    pub fn display_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}
