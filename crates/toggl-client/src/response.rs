//! HTTP response interpretation.

use std::sync::LazyLock;

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Maximum length of a response body written to the logs.
const MAX_LOG_BODY_LENGTH: usize = 500;

/// Toggl API tokens are 32 lowercase hex characters.
static TOKEN_PATTERN: LazyLock<regex_lite::Regex> =
    LazyLock::new(|| regex_lite::Regex::new(r"\b[0-9a-f]{32}\b").expect("token pattern is valid"));

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    body: String,
}

impl Response {
    /// Create a response from a status code and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Read a reqwest response to completion.
    pub(crate) async fn read(inner: reqwest::Response) -> Result<Self> {
        let status = inner.status().as_u16();
        let body = inner.text().await?;
        Ok(Self { status, body })
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// The canonical reason phrase for the status code, if it has one.
    pub fn reason(&self) -> Option<&'static str> {
        reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
    }

    /// Turn a non-2xx response into an error.
    ///
    /// - 403 is always [`ErrorKind::Authentication`], whatever the body.
    /// - Any other non-2xx is [`ErrorKind::Request`]. Its detail is the
    ///   decoded JSON body, or the reason phrase when the body is not JSON.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(parse_error_response(self.status, self.reason(), &self.body))
    }

    /// Deserialize the body as JSON. An empty body decodes as JSON `null`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        if self.body.trim().is_empty() {
            return serde_json::from_value(serde_json::Value::Null).map_err(Into::into);
        }
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

fn parse_error_response(status: u16, reason: Option<&str>, body: &str) -> Error {
    if status == 403 {
        return Error::new(ErrorKind::Authentication("incorrect API token".to_string()));
    }

    let detail = serde_json::from_str::<serde_json::Value>(body)
        .unwrap_or_else(|_| serde_json::Value::String(reason.unwrap_or_default().to_string()));

    Error::new(ErrorKind::Request { status, detail })
}

/// Prepare a response body for logging.
///
/// Redacts anything shaped like an API token and truncates long bodies.
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let mut sanitized = TOKEN_PATTERN
        .replace_all(body, "[REDACTED_TOKEN]")
        .to_string();

    if sanitized.len() > MAX_LOG_BODY_LENGTH {
        let mut cut = MAX_LOG_BODY_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
