//! Media upload client.
//!
//! One POST-only route accepts multipart form data, proxies it to the
//! third-party media host, and answers with a secure URL. The client never
//! issues any other verb against this route.

use std::time::Duration;

use serde::Deserialize;
use waypost_core::config::MediaConfig;

use crate::error::{Error, Result};

/// Response from the upload proxy.
#[derive(Debug, Clone, Deserialize)]
struct UploadResponse {
    #[serde(rename = "secureUrl", alias = "secure_url")]
    secure_url: String,
}

/// Client for the media upload proxy.
#[derive(Clone)]
pub struct MediaClient {
    http: reqwest::Client,
    upload_url: String,
    api_key: Option<String>,
}

impl MediaClient {
    /// Creates an upload client from the media configuration.
    pub fn new(config: &MediaConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self {
            http,
            upload_url: config.upload_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Uploads one file and returns its secure URL.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let mut builder = self.http.post(&self.upload_url).multipart(form);
        if let Some(key) = &self.api_key {
            builder = builder.header("X-Api-Key", key);
        }

        log::debug!("Uploading '{file_name}' to media proxy");
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("message")
                        .and_then(|m| m.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| format!("upload failed with status {status}"));
            return Err(Error::api(status, message));
        }

        let parsed: UploadResponse =
            serde_json::from_str(&body).map_err(waypost_core::Error::from)?;
        Ok(parsed.secure_url)
    }
}
