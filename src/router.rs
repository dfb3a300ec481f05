use crate::backend::envelope::Page;
use crate::backend::models::{ProjectRecord, PropertyRecord};
use crate::backend::Backend;
use crate::db::Database;
use crate::domain::view_state::ScreenState;
use crate::errors::ServerError;
use crate::query::{project_mount, project_query, property_mount, property_query, QueryMap};
use crate::responses::{asset_response, html_response, html_response_with_cookie, ResultResp};
use crate::session;
use crate::state_store::SqliteStore;
use crate::templates::pages;
use astra::Request;

/// Shared per-process application state, handed to every request.
pub struct App {
    pub db: Database,
    pub backend: Box<dyn Backend>,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or("").to_string();

    match (method, path.as_str()) {
        ("GET", "/") => html_response(pages::home_page()),
        ("GET", "/properties") => properties_screen(&req, app, &query),
        ("GET", "/projects") => projects_screen(&req, app, &query),
        ("GET", "/about") => html_response(pages::about_page()),
        ("GET", "/contact") => html_response(pages::contact_page()),
        ("GET", "/static/main.css") => {
            asset_response(include_str!("../static/main.css"), mime::TEXT_CSS)
        }
        ("GET", "/static/placeholder.svg") => {
            asset_response(include_str!("../static/placeholder.svg"), mime::IMAGE_SVG)
        }
        ("GET", p) => {
            if let Some(id) = p.strip_prefix("/properties/") {
                property_detail(app, id, &query)
            } else if let Some(id) = p.strip_prefix("/projects/") {
                project_detail(app, id, &query)
            } else {
                Err(ServerError::NotFound)
            }
        }
        _ => Err(ServerError::NotFound),
    }
}

fn properties_screen(req: &Request, app: &App, query: &str) -> ResultResp {
    let session = session::establish(req);
    let store = SqliteStore::new(&app.db, session.hash);

    let q = QueryMap::parse(query);
    let mut state = ScreenState::mount("properties", property_mount(&q), &store);

    let page = fetch_or_empty(app.backend.fetch_properties(), "properties");
    let filtered: Vec<&PropertyRecord> = page
        .items
        .iter()
        .filter(|p| state.filters.matches(p))
        .collect();

    let slice = state.paginate(filtered.len(), &store);
    let vm = pages::PropertiesVm {
        state: &state,
        slice,
        visible: filtered[slice.start..slice.end].to_vec(),
        total_filtered: filtered.len(),
    };
    html_response_with_cookie(pages::properties_page(&vm), session.set_cookie)
}

fn projects_screen(req: &Request, app: &App, query: &str) -> ResultResp {
    let session = session::establish(req);
    let store = SqliteStore::new(&app.db, session.hash);

    let q = QueryMap::parse(query);
    let mut state = ScreenState::mount("projects", project_mount(&q), &store);

    let page = fetch_or_empty(app.backend.fetch_projects(), "projects");
    let filtered: Vec<&ProjectRecord> = page
        .items
        .iter()
        .filter(|p| state.filters.matches(p))
        .collect();

    let slice = state.paginate(filtered.len(), &store);
    let vm = pages::ProjectsVm {
        state: &state,
        slice,
        visible: filtered[slice.start..slice.end].to_vec(),
        total_filtered: filtered.len(),
    };
    html_response_with_cookie(pages::projects_page(&vm), session.set_cookie)
}

fn property_detail(app: &App, id: &str, query: &str) -> ResultResp {
    let record = fetch_record(app.backend.fetch_property(id), "property", id)?;

    // The query string is the snapshot the listing attached to the card
    // link; echo it back on the back link, untouched.
    let mount = property_mount(&QueryMap::parse(query));
    let mut snap = crate::domain::view_state::NavigationSnapshot {
        filters: mount.filters.unwrap_or_default(),
        view_mode: mount.view_mode.unwrap_or_default(),
        current_page: mount.current_page.unwrap_or(1),
        scroll_position: mount.scroll_position.unwrap_or(0),
        filter_panel_open: mount.filter_panel_open.unwrap_or(false),
    };
    snap.current_page = snap.current_page.max(1);

    let back_href = format!("/properties?{}", property_query(&snap));
    html_response(pages::property_detail_page(&record, &back_href))
}

fn project_detail(app: &App, id: &str, query: &str) -> ResultResp {
    let record = fetch_record(app.backend.fetch_project(id), "project", id)?;

    let mount = project_mount(&QueryMap::parse(query));
    let mut snap = crate::domain::view_state::NavigationSnapshot {
        filters: mount.filters.unwrap_or_default(),
        view_mode: mount.view_mode.unwrap_or_default(),
        current_page: mount.current_page.unwrap_or(1),
        scroll_position: mount.scroll_position.unwrap_or(0),
        filter_panel_open: mount.filter_panel_open.unwrap_or(false),
    };
    snap.current_page = snap.current_page.max(1);

    let back_href = format!("/projects?{}", project_query(&snap));
    html_response(pages::project_detail_page(&record, &back_href))
}

/// A record that cannot be fetched renders as not found, whether the
/// backend answered "no such record" or failed outright.
fn fetch_record<T>(
    result: Result<Option<T>, ServerError>,
    what: &str,
    id: &str,
) -> Result<T, ServerError> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(ServerError::NotFound),
        Err(e) => {
            eprintln!("backend fetch failed for {what} {id}: {e}");
            Err(ServerError::NotFound)
        }
    }
}

/// A listing screen with a dead backend renders empty rather than
/// erroring; the failure is logged and the visitor sees the empty
/// state.
fn fetch_or_empty<T>(result: Result<Page<T>, ServerError>, what: &str) -> Page<T> {
    match result {
        Ok(page) => page,
        Err(e) => {
            eprintln!("backend fetch failed for {what}: {e}");
            Page::empty()
        }
    }
}
