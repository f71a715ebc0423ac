//! Request descriptors.
//!
//! A [`Request`] is built fresh for every call and consumed by
//! [`GitHubClient::dispatch`](crate::GitHubClient::dispatch).

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// One HTTP exchange to perform against the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    endpoint: String,
    params: Vec<(String, Option<String>)>,
    body: Option<Value>,
}

impl Request {
    /// Create a request for `endpoint`, relative to the client's base URL.
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PATCH, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Add a query parameter. `None` values are recorded but not sent.
    #[must_use]
    pub fn param<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        self.params
            .push((key.to_string(), value.map(|v| v.to_string())));
        self
    }

    /// Add every field of a serializable struct as a query parameter.
    ///
    /// Fields must be scalars; `null` fields are recorded as `None`.
    ///
    /// # Errors
    ///
    /// Returns a parse error if `query` is not a flat object.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self> {
        let fields = match serde_json::to_value(query)? {
            Value::Object(fields) => fields,
            Value::Null => return Ok(self),
            other => return Err(not_flat(&other)),
        };

        for (key, value) in fields {
            let value = match value {
                Value::Null => None,
                Value::String(s) => Some(s),
                Value::Bool(b) => Some(b.to_string()),
                Value::Number(n) => Some(n.to_string()),
                other => return Err(not_flat(&other)),
            };
            self.params.push((key, value));
        }
        Ok(self)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a parse error if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// All recorded parameters, including those without a value.
    pub fn params(&self) -> &[(String, Option<String>)] {
        &self.params
    }

    /// Parameters that are actually sent.
    pub fn wire_params(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
            .collect()
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

fn not_flat(value: &Value) -> crate::GitHubError {
    let err = <serde_json::Error as serde::ser::Error>::custom(format!(
        "query parameters must be scalar values, got {value}"
    ));
    err.into()
}
