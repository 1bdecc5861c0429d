//! Generic REST resource client.
//!
//! Every backend entity follows the same five-operation pattern; what
//! differs per resource is its path, how updates are keyed, and which verb
//! its status endpoint takes. Those differences are backend facts, not
//! conventions to canonicalize, so each entity module pins them in a
//! [`ResourceSpec`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use waypost_core::{DocumentStatus, Page, PageQuery};

use crate::error::Result;
use crate::request::{ApiRequest, Connection, Payload};

/// How a resource keys its update requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStyle {
    /// PUT `/{path}/{id}` with the draft as the body.
    ByPath,

    /// PUT `/{path}` with the id embedded in the body.
    InBody,
}

/// Which verb a resource's `/status` endpoint takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusVerb {
    /// POST `/{path}/status`.
    Post,

    /// PUT `/{path}/status`.
    Put,
}

/// Per-resource wiring: path and contract quirks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Resource path segment (`"Consignment"`).
    pub path: &'static str,

    /// How updates are keyed.
    pub update_style: UpdateStyle,

    /// Verb of the `/status` endpoint, for resources that have one.
    pub status_verb: Option<StatusVerb>,
}

/// An attachment reference carried on file-bearing records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    /// Original file name.
    pub name: String,

    /// Secure URL returned by the media proxy.
    pub url: String,
}

/// Generic client over one REST resource.
pub struct ResourceClient<C> {
    conn: Arc<C>,
    spec: ResourceSpec,
}

impl<C> ResourceClient<C> {
    /// Creates a client for the given resource wiring.
    pub fn new(conn: Arc<C>, spec: ResourceSpec) -> Self {
        Self { conn, spec }
    }

    /// The resource wiring this client was built with.
    pub fn spec(&self) -> &ResourceSpec {
        &self.spec
    }

    /// The underlying connection.
    pub fn connection(&self) -> &C {
        &self.conn
    }
}

impl<C: Connection> ResourceClient<C> {
    /// Creates a record (POST `/{path}`).
    pub async fn create<D, T>(&self, draft: &D) -> Result<T>
    where
        D: Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = to_payload(draft)?;
        let payload = self
            .conn
            .request(ApiRequest::post(self.spec.path, body))
            .await?;
        from_payload(payload)
    }

    /// Lists a page of records (GET `/{path}?PageIndex=&PageSize=&…`).
    pub async fn list<T>(&self, page: &PageQuery) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let payload = self
            .conn
            .request(ApiRequest::get(self.spec.path).with_query(page.query_pairs()))
            .await?;
        from_payload(payload)
    }

    /// Fetches one record (GET `/{path}/{id}`).
    pub async fn get<T>(&self, id: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let payload = self
            .conn
            .request(ApiRequest::get(format!("{}/{id}", self.spec.path)))
            .await?;
        from_payload(payload)
    }

    /// Updates a record (PUT, keyed per the resource's [`UpdateStyle`]).
    pub async fn update<D, T>(&self, id: &str, draft: &D) -> Result<T>
    where
        D: Serialize + Sync,
        T: DeserializeOwned,
    {
        let body = to_payload(draft)?;
        let request = self.put_record(id, body)?;
        let payload = self.conn.request(request).await?;
        from_payload(payload)
    }

    /// Deletes a record (DELETE `/{path}/{id}`).
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.conn
            .request(ApiRequest::delete(format!("{}/{id}", self.spec.path)))
            .await?;
        Ok(())
    }

    /// Changes a record's status via the resource's `/status` endpoint.
    pub async fn set_status(&self, id: &str, status: DocumentStatus) -> Result<()> {
        let verb = self.spec.status_verb.ok_or_else(|| {
            waypost_core::Error::validation(format!(
                "resource '{}' has no status endpoint",
                self.spec.path
            ))
        })?;
        let path = format!("{}/status", self.spec.path);
        let body = serde_json::json!({"id": id, "status": status});
        let request = match verb {
            StatusVerb::Post => ApiRequest::post(path, body),
            StatusVerb::Put => ApiRequest::put(path, body),
        };
        self.conn.request(request).await?;
        Ok(())
    }

    /// Replaces a record's file list.
    ///
    /// Prefers the narrow PUT `/{path}/Files/{id}` carrying only the file
    /// list. On any failure of that path it falls back to read-modify-write
    /// of the whole resource: exactly one fetch of the full record, the new
    /// file list merged into its `files` field, and exactly one full PUT.
    /// Failure of the fallback propagates unrecovered.
    pub async fn update_files(&self, id: &str, files: &[FileRef]) -> Result<()> {
        let files_value = to_payload(&files)?;
        let narrow = ApiRequest::put(
            format!("{}/Files/{id}", self.spec.path),
            serde_json::json!({"files": files_value.clone()}),
        );
        let first = match self.conn.request(narrow).await {
            Ok(_) => return Ok(()),
            Err(err) => err,
        };
        log::warn!(
            "Narrow file update of {}/{id} failed ({first}); falling back to full-record update",
            self.spec.path
        );

        let mut record = self
            .conn
            .request(ApiRequest::get(format!("{}/{id}", self.spec.path)))
            .await?;
        let Some(fields) = record.as_object_mut() else {
            return Err(waypost_core::Error::parse(format!(
                "expected a record object from {}/{id}",
                self.spec.path
            ))
            .into());
        };
        fields.insert("files".to_string(), files_value);

        let request = self.put_record(id, record)?;
        self.conn.request(request).await?;
        Ok(())
    }

    /// Builds the full-record PUT for this resource's update style.
    fn put_record(&self, id: &str, mut body: Payload) -> Result<ApiRequest> {
        match self.spec.update_style {
            UpdateStyle::ByPath => {
                Ok(ApiRequest::put(format!("{}/{id}", self.spec.path), body))
            }
            UpdateStyle::InBody => {
                let Some(fields) = body.as_object_mut() else {
                    return Err(waypost_core::Error::parse(format!(
                        "update body for '{}' must be an object",
                        self.spec.path
                    ))
                    .into());
                };
                fields.insert("id".to_string(), Payload::String(id.to_string()));
                Ok(ApiRequest::put(self.spec.path, body))
            }
        }
    }
}

fn to_payload<D: Serialize>(draft: &D) -> Result<Payload> {
    Ok(serde_json::to_value(draft).map_err(waypost_core::Error::from)?)
}

fn from_payload<T: DeserializeOwned>(payload: Payload) -> Result<T> {
    Ok(serde_json::from_value(payload).map_err(waypost_core::Error::from)?)
}
