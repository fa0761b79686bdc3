#![deny(warnings)]

// Request dispatcher: one parsed request in, one response out

use crate::error::{FileIoBridgeError, ProtocolError, Result};
use crate::operations::{read_file, write_file};
use serde::Serialize;
use serde_json::{Map, Value};

/// Outcome of exactly one request, serialized as one output line
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum Response {
    /// Read succeeded
    Content { content: String },
    /// Write succeeded
    Success { success: bool },
    /// Any failure or unknown operation
    Error { error: String },
}

impl Response {
    fn success() -> Self {
        Response::Success { success: true }
    }

    fn error(message: String) -> Self {
        Response::Error { error: message }
    }

    fn from_error(error: &FileIoBridgeError) -> Self {
        Response::error(error.to_string())
    }
}

/// Parse one input line and dispatch it.
///
/// A line that is not valid JSON yields an error response for that line
/// only; the caller's loop keeps running either way.
pub fn handle_line(line: &str) -> Response {
    match serde_json::from_str::<Value>(line) {
        Ok(request) => handle_request(&request),
        Err(e) => Response::from_error(&ProtocolError::InvalidRequest(e.to_string()).into()),
    }
}

/// Handle a parsed request. Never fails: every operation failure is caught
/// here and rendered as an error response.
pub fn handle_request(request: &Value) -> Response {
    match dispatch(request) {
        Ok(response) => response,
        Err(e) => Response::from_error(&e),
    }
}

fn dispatch(request: &Value) -> Result<Response> {
    let obj = request.as_object().ok_or_else(|| {
        ProtocolError::InvalidRequest("request must be a JSON object".to_string())
    })?;

    match obj.get("operation").and_then(|v| v.as_str()) {
        Some("read") => {
            let path = require_str(obj, "path")?;
            let content = read_file::read_file(path)?;
            Ok(Response::Content { content })
        }
        Some("write") => {
            let path = require_str(obj, "path")?;
            let content = require_str(obj, "content")?;
            write_file::write_file(path, content)?;
            Ok(Response::success())
        }
        _ => {
            // Structured result, not a failure: the operation field named
            // something we don't do (or named nothing at all).
            let label = match obj.get("operation") {
                None => "(missing)".to_string(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            };
            Ok(Response::error(format!("Unknown operation: {}", label)))
        }
    }
}

fn require_str<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Result<&'a str> {
    match obj.get(field) {
        None => Err(ProtocolError::MissingField(field).into()),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ProtocolError::NonStringField(field).into()),
    }
}
