// src/tests/utils.rs
//
// Shared helpers for the router tests: a throwaway per-test database on
// the production schema, a canned backend serving fixtures without a
// network, and request/response plumbing.

use crate::backend::envelope::Page;
use crate::backend::models::{ProjectRecord, PropertyRecord};
use crate::backend::Backend;
use crate::db::{init_db, Database};
use crate::errors::{ResultResp, ServerError};
use crate::router::{handle, App};
use astra::Body;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh test database on the production schema, at a unique temp path.
pub fn make_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "estate_portal_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// Backend serving canned records. With `fail` set every fetch errors,
/// for exercising the degraded-backend path.
#[derive(Default)]
pub struct StaticBackend {
    pub properties: Vec<PropertyRecord>,
    pub projects: Vec<ProjectRecord>,
    pub fail: bool,
}

impl Backend for StaticBackend {
    fn fetch_properties(&self) -> Result<Page<PropertyRecord>, ServerError> {
        self.guard()?;
        Ok(Page {
            items: self.properties.clone(),
            total: self.properties.len(),
        })
    }

    fn fetch_projects(&self) -> Result<Page<ProjectRecord>, ServerError> {
        self.guard()?;
        Ok(Page {
            items: self.projects.clone(),
            total: self.projects.len(),
        })
    }

    fn fetch_property(&self, id: &str) -> Result<Option<PropertyRecord>, ServerError> {
        self.guard()?;
        Ok(self.properties.iter().find(|p| p.id == id).cloned())
    }

    fn fetch_project(&self, id: &str) -> Result<Option<ProjectRecord>, ServerError> {
        self.guard()?;
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }
}

impl StaticBackend {
    fn guard(&self) -> Result<(), ServerError> {
        if self.fail {
            Err(ServerError::Backend("backend down".to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn make_app(backend: StaticBackend) -> App {
    App {
        db: make_db(),
        backend: Box::new(backend),
    }
}

pub fn get(app: &App, uri: &str) -> ResultResp {
    let req = http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, app)
}

pub fn get_with_cookie(app: &App, uri: &str, cookie: &str) -> ResultResp {
    let req = http::Request::builder()
        .method("GET")
        .uri(uri)
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap();
    handle(req, app)
}

pub fn read_body(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

/// The "sid=..." pair out of a Set-Cookie header value.
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .expect("empty Set-Cookie")
        .to_string()
}

pub fn property_fixture(id: &str, name: &str, purpose: &str, price: &str) -> PropertyRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "property_name": name,
        "property_type": "House",
        "purpose": purpose,
        "location": "DHA Phase 6, Karachi",
        "price": price,
        "area_size": "500",
        "beds": "4",
        "baths": "3",
        "description": "Spacious family home."
    }))
    .unwrap()
}

pub fn property_fixtures(n: usize) -> Vec<PropertyRecord> {
    (1..=n)
        .map(|i| property_fixture(&i.to_string(), &format!("Listing {i}"), "Sale", "2 Crore"))
        .collect()
}

pub fn project_fixture(id: &str, name: &str, status: &str, category: &str) -> ProjectRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "project_name": name,
        "category": category,
        "status": status,
        "completion": "2026",
        "location": "Clifton, Karachi",
        "project_type": "Sale",
        "price": "5 Crore",
        "area_size": "1200",
        "description": "Mixed-use development."
    }))
    .unwrap()
}
