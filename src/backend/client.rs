// src/backend/client.rs

use crate::backend::envelope::{normalize, Page};
use crate::backend::models::{ProjectRecord, PropertyRecord};
use crate::backend::Backend;
use crate::errors::ServerError;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("estate-portal/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the REST backend. One instance is shared across
/// worker threads; reqwest's blocking client is internally pooled.
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, ServerError> {
        let base = Url::parse(base_url)
            .map_err(|e| ServerError::Backend(format!("bad backend URL {base_url}: {e}")))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| ServerError::Backend(format!("client build failed: {e}")))?;

        Ok(Self { client, base })
    }

    fn get_json(&self, path: &str) -> Result<Value, ServerError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| ServerError::Backend(format!("bad path {path}: {e}")))?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ServerError::Backend(format!("request failed: {e}")))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Value::Null);
        }
        if !resp.status().is_success() {
            return Err(ServerError::Backend(format!(
                "backend returned {} for {path}",
                resp.status()
            )));
        }

        resp.json()
            .map_err(|e| ServerError::Backend(format!("bad JSON from {path}: {e}")))
    }

    fn get_record<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ServerError> {
        match self.get_json(path)? {
            Value::Null => Ok(None),
            value => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ServerError::Backend(format!("bad record from {path}: {e}"))),
        }
    }
}

impl Backend for HttpBackend {
    fn fetch_properties(&self) -> Result<Page<PropertyRecord>, ServerError> {
        Ok(normalize(self.get_json("/api/properties")?))
    }

    fn fetch_projects(&self) -> Result<Page<ProjectRecord>, ServerError> {
        Ok(normalize(self.get_json("/api/projects")?))
    }

    fn fetch_property(&self, id: &str) -> Result<Option<PropertyRecord>, ServerError> {
        self.get_record(&format!("/api/properties/{id}"))
    }

    fn fetch_project(&self, id: &str) -> Result<Option<ProjectRecord>, ServerError> {
        self.get_record(&format!("/api/projects/{id}"))
    }
}
