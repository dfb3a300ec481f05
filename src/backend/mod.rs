// src/backend/mod.rs
//
// Boundary to the REST backend that owns the listing data. The trait
// exists so router tests can serve fixtures without a network; the one
// production implementation is the reqwest client.

pub mod client;
pub mod envelope;
pub mod models;

use crate::errors::ServerError;
use envelope::Page;
use models::{ProjectRecord, PropertyRecord};

pub use client::HttpBackend;

pub trait Backend: Send + Sync {
    fn fetch_properties(&self) -> Result<Page<PropertyRecord>, ServerError>;
    fn fetch_projects(&self) -> Result<Page<ProjectRecord>, ServerError>;
    fn fetch_property(&self, id: &str) -> Result<Option<PropertyRecord>, ServerError>;
    fn fetch_project(&self, id: &str) -> Result<Option<ProjectRecord>, ServerError>;
}
