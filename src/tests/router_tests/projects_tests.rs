// src/tests/router_tests/projects_tests.rs

use crate::tests::utils::{get, make_app, project_fixture, read_body, StaticBackend};

fn sample_projects() -> Vec<crate::backend::models::ProjectRecord> {
    vec![
        project_fixture("1", "Crescent Heights", "Upcoming", "Apartment"),
        project_fixture("2", "Marina Residences", "Under Construction", "Apartment"),
        project_fixture("3", "Emerald Mall", "Completed", "Shop"),
    ]
}

#[test]
fn listing_renders_fixture_cards() {
    let app = make_app(StaticBackend {
        projects: sample_projects(),
        ..Default::default()
    });

    let body = read_body(get(&app, "/projects").unwrap());
    assert!(body.contains("Crescent Heights"));
    assert!(body.contains("Emerald Mall"));
    assert!(body.contains("Showing 1-3 of 3 projects"));
}

#[test]
fn the_all_category_shows_everything() {
    let app = make_app(StaticBackend {
        projects: sample_projects(),
        ..Default::default()
    });

    let body = read_body(get(&app, "/projects?category=All").unwrap());
    assert!(body.contains("Showing 1-3 of 3 projects"));
}

#[test]
fn status_filter_narrows_the_results() {
    let app = make_app(StaticBackend {
        projects: sample_projects(),
        ..Default::default()
    });

    let body = read_body(get(&app, "/projects?status=Completed").unwrap());
    assert!(body.contains("Emerald Mall"));
    assert!(!body.contains("Crescent Heights"));
}

#[test]
fn category_filter_is_case_insensitive() {
    let app = make_app(StaticBackend {
        projects: sample_projects(),
        ..Default::default()
    });

    let body = read_body(get(&app, "/projects?category=shop").unwrap());
    assert!(body.contains("Emerald Mall"));
    assert!(body.contains("Showing 1-1 of 1 projects"));
}

#[test]
fn completion_filter_matches_by_containment() {
    let app = make_app(StaticBackend {
        projects: sample_projects(),
        ..Default::default()
    });

    let body = read_body(get(&app, "/projects?completion=2026").unwrap());
    assert!(body.contains("Showing 1-3 of 3 projects"));

    let body = read_body(get(&app, "/projects?completion=2030").unwrap());
    assert!(body.contains("No projects found"));
}

#[test]
fn detail_page_renders_the_record() {
    let app = make_app(StaticBackend {
        projects: sample_projects(),
        ..Default::default()
    });

    let body = read_body(get(&app, "/projects/2").unwrap());
    assert!(body.contains("Marina Residences"));
    assert!(body.contains("Under Construction"));
    assert!(body.contains("Back to Projects"));
}
