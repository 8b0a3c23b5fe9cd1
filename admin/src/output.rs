use anyhow::Result;
use client::{ClientError, Payload};
use std::io::{self, Write};

pub fn print_payload(payload: &Payload) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match payload {
        Payload::Empty => {}
        Payload::Json(value) => writeln!(stdout, "{}", serde_json::to_string_pretty(value)?)?,
        Payload::Raw(raw) => writeln!(stdout, "{raw}")?,
    }
    Ok(())
}

/// Server-side failures carry a body worth showing; print it before the
/// error bubbles up.
pub fn report_error(error: &ClientError) {
    if let Some(payload) = error.payload() {
        let detail = match payload {
            Payload::Json(value) => value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
            Payload::Raw(raw) => raw.clone(),
            Payload::Empty => return,
        };
        eprintln!("server response: {detail}");
    }
}
