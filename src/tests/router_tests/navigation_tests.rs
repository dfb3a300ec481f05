// src/tests/router_tests/navigation_tests.rs
//
// The listing -> detail -> back round trip: card links carry the
// browsing snapshot, the detail page echoes it on its back link, and
// re-entering the listing with that snapshot restores page, view mode,
// and scroll.

use crate::errors::ServerError;
use crate::tests::utils::{get, make_app, property_fixtures, read_body, StaticBackend};

#[test]
fn card_links_carry_the_browsing_snapshot() {
    let app = make_app(StaticBackend {
        properties: property_fixtures(30),
        ..Default::default()
    });

    let body = read_body(get(&app, "/properties?view=list&page=2").unwrap());
    // & is entity-escaped inside href attributes.
    assert!(body.contains(r#"href="/properties/21?view=list&amp;page=2""#));
}

#[test]
fn detail_back_link_echoes_the_snapshot() {
    let app = make_app(StaticBackend {
        properties: property_fixtures(30),
        ..Default::default()
    });

    let body = read_body(
        get(&app, "/properties/5?purpose=Sale&view=list&page=2&scroll=840").unwrap(),
    );
    assert!(body.contains("Listing 5"));
    assert!(body.contains(
        r#"href="/properties?purpose=Sale&amp;view=list&amp;page=2&amp;scroll=840""#
    ));
}

#[test]
fn back_navigation_restores_page_view_and_scroll() {
    let app = make_app(StaticBackend {
        properties: property_fixtures(30),
        ..Default::default()
    });

    let body = read_body(get(&app, "/properties?view=list&page=2&scroll=840").unwrap());
    assert!(body.contains("Showing 21-30 of 30 properties"));
    assert!(body.contains("Page 2 of 2"));
    assert!(body.contains("window.scrollTo(0, 840)"));
}

#[test]
fn zero_scroll_emits_no_restore_script() {
    let app = make_app(StaticBackend {
        properties: property_fixtures(3),
        ..Default::default()
    });

    let body = read_body(get(&app, "/properties").unwrap());
    assert!(!body.contains("window.scrollTo"));
}

#[test]
fn open_filter_panel_survives_the_round_trip() {
    let app = make_app(StaticBackend {
        properties: property_fixtures(3),
        ..Default::default()
    });

    let body = read_body(get(&app, "/properties?panel=1").unwrap());
    assert!(body.contains("filter-sidebar open"));
    assert!(body.contains(r#"name="panel" value="1""#));
}

#[test]
fn unknown_property_id_is_not_found() {
    let app = make_app(StaticBackend {
        properties: property_fixtures(3),
        ..Default::default()
    });

    assert!(matches!(
        get(&app, "/properties/999"),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn detail_with_a_dead_backend_renders_not_found() {
    let app = make_app(StaticBackend {
        fail: true,
        ..Default::default()
    });

    assert!(matches!(
        get(&app, "/properties/1"),
        Err(ServerError::NotFound)
    ));
}
