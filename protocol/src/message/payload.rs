use serde_json::Value;

/// Response body after the incoming transform
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    /// Empty body, no decode attempted
    #[default]
    Empty,
    /// Body decoded as JSON
    Json(Value),
    /// Body that failed to decode, handed back verbatim
    Raw(String),
}

impl Payload {
    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    /// `message` field of a decoded record, if it is a string
    pub fn message(&self) -> Option<&str> {
        self.as_json()?.get("message")?.as_str()
    }
}

/// Result of decoding a response body
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    Ok(Payload),
    /// The body carried the unauthorized signal; the payload is still returned to the caller
    AuthExpired(Payload),
}

impl DecodeOutcome {
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, DecodeOutcome::AuthExpired(_))
    }

    pub fn payload(&self) -> &Payload {
        match self {
            DecodeOutcome::Ok(payload) | DecodeOutcome::AuthExpired(payload) => payload,
        }
    }

    pub fn into_payload(self) -> Payload {
        match self {
            DecodeOutcome::Ok(payload) | DecodeOutcome::AuthExpired(payload) => payload,
        }
    }
}
