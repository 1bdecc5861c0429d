//! The request shape and the connection seam.
//!
//! Resource clients build [`ApiRequest`] values and hand them to a
//! [`Connection`]. Production code uses
//! [`HttpConnection`](crate::HttpConnection); tests use the scripted
//! [`MockConnection`](crate::mock::MockConnection).

use async_trait::async_trait;

use crate::error::Result;

/// A JSON payload as returned by the backend, verbatim.
pub type Payload = serde_json::Value;

/// HTTP verb for an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET — list and fetch-one.
    Get,
    /// POST — create and some status endpoints.
    Post,
    /// PUT — update, status, and file-list endpoints.
    Put,
    /// DELETE — delete by id.
    Delete,
}

impl Method {
    /// The verb as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request against the backend, relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: Method,

    /// Resource path, without a leading slash (`"Consignment/42"`).
    pub path: String,

    /// Query-string pairs, in order.
    pub query: Vec<(String, String)>,

    /// JSON body, when the verb carries one.
    pub body: Option<Payload>,
}

impl ApiRequest {
    /// Builds a GET request.
    pub fn get<P: Into<String>>(path: P) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Builds a POST request with a JSON body.
    pub fn post<P: Into<String>>(path: P, body: Payload) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Builds a PUT request with a JSON body.
    pub fn put<P: Into<String>>(path: P, body: Payload) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Builds a DELETE request.
    pub fn delete<P: Into<String>>(path: P) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Appends query-string pairs.
    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }
}

/// The seam every resource client talks through.
///
/// One call, one response: implementations do not retry, debounce, or
/// deduplicate. Errors bubble to the caller.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Performs the request and returns the response payload verbatim.
    async fn request(&self, request: ApiRequest) -> Result<Payload>;
}
