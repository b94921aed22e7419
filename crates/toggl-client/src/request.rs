//! HTTP request building with Basic Auth and JSON bodies.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Ordered query parameters for a GET request.
///
/// Parameters whose value is `None` are kept so callers can build the full
/// set declaratively, but they are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, Option<String>)>,
}

impl Query {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter with a value.
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), Some(value.to_string())));
        self
    }

    /// Add a parameter that is only sent when `value` is `Some`.
    pub fn maybe<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.params
            .push((name.into(), value.map(|v| v.to_string())));
        self
    }

    /// Iterate over the parameters that will actually be sent.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name.as_str(), v)))
    }

    /// Returns true if no parameter would be sent.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// Builder for HTTP requests.
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
    /// Serialized JSON body.
    pub(crate) body: Option<String>,
    pub(crate) basic_auth: Option<(String, String)>,
}

impl std::fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("query_params", &self.query_params)
            .field("body", &self.body.as_ref().map(|b| b.len()))
            .field("basic_auth", &self.basic_auth.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            body: None,
            basic_auth: None,
        }
    }

    /// Set HTTP Basic credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Add every present parameter of `query`, skipping `None` values.
    pub fn query_all(mut self, query: &Query) -> Self {
        self.query_params.extend(
            query
                .present()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );
        self
    }

    /// Serialize `body` to a JSON string and use it as the request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let payload = serde_json::to_string(body).map_err(|e| {
            Error::with_source(ErrorKind::Serialization(e.to_string()), e)
        })?;
        self.body = Some(payload);
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The fully-qualified request URL, without query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The serialized JSON body, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com/api/v9/me")
            .basic_auth("token123", "api_token")
            .header("X-Custom", "value")
            .query("since", "1362579886");

        assert_eq!(req.method(), RequestMethod::Get);
        assert_eq!(req.url(), "https://example.com/api/v9/me");
        assert_eq!(
            req.basic_auth,
            Some(("token123".to_string(), "api_token".to_string()))
        );
        assert_eq!(req.headers.get("X-Custom"), Some(&"value".to_string()));
        assert_eq!(req.query_params.len(), 1);
    }

    #[test]
    fn test_query_skips_none_values() {
        let query = Query::new()
            .maybe("start_date", Some("2013-03-10T15:42:46+02:00"))
            .maybe::<&str>("end_date", None)
            .param("active", true);

        let present: Vec<_> = query.present().collect();
        assert_eq!(
            present,
            vec![
                ("start_date", "2013-03-10T15:42:46+02:00"),
                ("active", "true"),
            ]
        );

        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com").query_all(&query);
        assert_eq!(req.query_params.len(), 2);
        assert!(req.query_params.iter().all(|(name, _)| name != "end_date"));
    }

    #[test]
    fn test_query_with_only_none_is_empty() {
        let query = Query::new().maybe::<i64>("since", None);
        assert!(query.is_empty());
        assert!(Query::new().is_empty());
    }

    #[test]
    fn test_json_body() {
        let data = serde_json::json!({"client": {"name": "Acme", "wid": 777}});
        let req = RequestBuilder::new(RequestMethod::Post, "https://example.com")
            .json(&data)
            .unwrap();

        assert_eq!(req.body(), Some(serde_json::to_string(&data).unwrap().as_str()));
        assert_eq!(
            req.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_json_body_serialization_error() {
        use std::collections::BTreeMap;

        // JSON object keys must be strings.
        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], "value");

        let err = RequestBuilder::new(RequestMethod::Put, "https://example.com")
            .json(&bad)
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Serialization(_)));
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com")
            .basic_auth("secret-token-value", "api_token");
        let debug = format!("{:?}", req);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-token-value"));
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(RequestMethod::Patch.to_reqwest(), reqwest::Method::PATCH);
        assert_eq!(RequestMethod::Delete.to_reqwest(), reqwest::Method::DELETE);
    }
}
