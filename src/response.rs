//! Raw response interpretation: success extraction and failure normalization.
//!
//! The transport hands back a [`RawResponse`]; this module decides
//! success/failure from the status, extracts a body according to the
//! declared content type, and folds every failure into a
//! [`ClassifiedError`].

use crate::retry::{classify_http_status, default_message, ClassifiedError, ErrorKind};
use serde_json::Value;

/// Response as received from the injected transport, before interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers as received; names matched case-insensitively.
    pub headers: Vec<(String, String)>,
    /// Body text. Structured bodies are parsed lazily during interpretation.
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `Content-Type` header value, if present.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }

    /// True when the declared content type is JSON (`application/json` or a
    /// `+json` suffix). Media type parameters (charset etc.) are ignored.
    fn is_json(&self) -> bool {
        self.content_type()
            .map(|ct| {
                let media = ct.split(';').next().unwrap_or("").trim();
                media.eq_ignore_ascii_case("application/json")
                    || media.to_ascii_lowercase().ends_with("+json")
            })
            .unwrap_or(false)
    }
}

/// Successful outcome of a request: parsed per content negotiation.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchedBody {
    /// Structured body (JSON content type).
    Json(Value),
    /// Anything else, returned verbatim.
    Text(String),
}

impl FetchedBody {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            FetchedBody::Json(v) => Some(v),
            FetchedBody::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FetchedBody::Text(s) => Some(s),
            FetchedBody::Json(_) => None,
        }
    }
}

/// Interprets a raw response into a success value or a classified error.
///
/// On a success status, a body that contradicts its declared JSON content
/// type is a defect and surfaces as `Unknown`. On a failure status the error
/// body is parsed best-effort: parse failures are swallowed (`data = None`)
/// and the message falls back to the taxonomy default for the kind.
pub fn interpret(resp: RawResponse) -> Result<FetchedBody, ClassifiedError> {
    if resp.is_success() {
        if resp.is_json() {
            return serde_json::from_str(&resp.body)
                .map(FetchedBody::Json)
                .map_err(|e| {
                    ClassifiedError::new(
                        ErrorKind::Unknown,
                        resp.status,
                        format!("malformed response body: {}", e),
                        None,
                    )
                });
        }
        return Ok(FetchedBody::Text(resp.body));
    }

    let kind = classify_http_status(resp.status);
    let data: Option<Value> = serde_json::from_str(&resp.body).ok();
    let message = data
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| default_message(kind).to_string());

    Err(ClassifiedError::new(kind, resp.status, message, data))
}
