//! The reqwest-backed connection (the fetch wrapper).

use std::time::Duration;

use async_trait::async_trait;
use waypost_core::WaypostConfig;
use waypost_session::Session;

use crate::error::{Error, Result};
use crate::request::{ApiRequest, Connection, Method, Payload};

/// HTTP connection to the backend.
///
/// Holds the base URL, the shared [`Session`], and a pooled reqwest
/// client. Cheap to clone.
#[derive(Clone)]
pub struct HttpConnection {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HttpConnection {
    /// Creates a connection against the given base URL.
    pub fn new<S: Into<String>>(base_url: S, session: Session) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Creates a connection from the loaded configuration.
    pub fn from_config(config: &WaypostConfig, session: Session) -> Result<Self> {
        Self::new(config.api.base_url.clone(), session)
    }

    /// The session this connection reads tokens from.
    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[async_trait]
impl Connection for HttpConnection {
    async fn request(&self, request: ApiRequest) -> Result<Payload> {
        // Unauthenticated requests never reach the network.
        let token = self.session.token().ok_or(Error::Unauthenticated)?;

        let url = format!("{}/{}", self.base_url, request.path);
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };
        builder = builder.bearer_auth(token.as_str());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        log::debug!("{} /{}", request.method, request.path);
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        complete_request(&self.session, status, &body)
    }
}

/// Applies the response policy. This is the single place auth teardown and
/// error mapping happen, for every resource call:
///
/// - 401 → revoke the session (global sign-out) and fail
/// - other non-2xx → fail with the server's `message` field when present
/// - 2xx → parse the body as JSON and return it verbatim (empty → null)
pub(crate) fn complete_request(session: &Session, status: u16, body: &str) -> Result<Payload> {
    if status == 401 {
        session.revoke("the backend rejected the session token");
        return Err(Error::SessionRevoked);
    }

    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Payload>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("request failed with status {status}"));
        return Err(Error::api(status, message));
    }

    if body.trim().is_empty() {
        return Ok(Payload::Null);
    }
    Ok(serde_json::from_str(body).map_err(waypost_core::Error::from)?)
}
