// src/tests/router_tests/properties_tests.rs

use crate::errors::ServerError;
use crate::tests::utils::{
    cookie_pair, get, get_with_cookie, make_app, property_fixture, property_fixtures, read_body,
    StaticBackend,
};

#[test]
fn listing_renders_fixture_cards() {
    let app = make_app(StaticBackend {
        properties: vec![
            property_fixture("1", "Sea View Villa", "Sale", "4 Crore"),
            property_fixture("2", "Gulshan Apartment", "Rent", "80 Thousand"),
        ],
        ..Default::default()
    });

    let resp = get(&app, "/properties").unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Sea View Villa"));
    assert!(body.contains("Gulshan Apartment"));
    assert!(body.contains("Showing 1-2 of 2 properties"));
}

#[test]
fn query_filters_narrow_the_results() {
    let app = make_app(StaticBackend {
        properties: vec![
            property_fixture("1", "Sea View Villa", "Sale", "4 Crore"),
            property_fixture("2", "Gulshan Apartment", "Rent", "80 Thousand"),
        ],
        ..Default::default()
    });

    let body = read_body(get(&app, "/properties?purpose=Rent").unwrap());
    assert!(body.contains("Gulshan Apartment"));
    assert!(!body.contains("Sea View Villa"));
    assert!(body.contains("Showing 1-1 of 1 properties"));
}

#[test]
fn tile_view_slices_sixty_per_page() {
    let app = make_app(StaticBackend {
        properties: property_fixtures(130),
        ..Default::default()
    });

    let body = read_body(get(&app, "/properties?page=3").unwrap());
    assert!(body.contains("Showing 121-130 of 130 properties"));
    assert!(body.contains("Page 3 of 3"));
    assert!(body.contains("Listing 121"));
    assert!(!body.contains("Listing 120<"));
}

#[test]
fn list_view_slices_twenty_per_page() {
    let app = make_app(StaticBackend {
        properties: property_fixtures(130),
        ..Default::default()
    });

    let body = read_body(get(&app, "/properties?view=list&page=2").unwrap());
    assert!(body.contains("Showing 21-40 of 130 properties"));
    assert!(body.contains("Page 2 of 7"));
}

#[test]
fn out_of_range_page_snaps_back_to_one() {
    let app = make_app(StaticBackend {
        properties: property_fixtures(130),
        ..Default::default()
    });

    let body = read_body(get(&app, "/properties?page=9").unwrap());
    assert!(body.contains("Showing 1-60 of 130 properties"));
    assert!(body.contains("Page 1 of 3"));
}

#[test]
fn no_matches_renders_the_empty_state() {
    let app = make_app(StaticBackend {
        properties: vec![property_fixture("1", "Sea View Villa", "Sale", "4 Crore")],
        ..Default::default()
    });

    let body = read_body(get(&app, "/properties?purpose=Rent").unwrap());
    assert!(body.contains("No properties found"));
    assert!(body.contains("Try adjusting your filters"));
}

#[test]
fn dead_backend_degrades_to_the_empty_state() {
    let app = make_app(StaticBackend {
        fail: true,
        ..Default::default()
    });

    let resp = get(&app, "/properties").unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("No properties found"));
}

#[test]
fn view_mode_survives_the_session_cookie() {
    let app = make_app(StaticBackend {
        properties: property_fixtures(3),
        ..Default::default()
    });

    // First visit picks list view and gets a session cookie.
    let resp = get(&app, "/properties?view=list").unwrap();
    let set_cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .expect("fresh session should set a cookie")
        .to_string();
    let cookie = cookie_pair(&set_cookie);

    // A bare revisit within the session restores list view.
    let resp = get_with_cookie(&app, "/properties", &cookie).unwrap();
    assert!(resp.headers().get("Set-Cookie").is_none());
    let body = read_body(resp);
    assert!(body.contains(r#"name="view" value="list""#));
}

#[test]
fn sessions_do_not_see_each_other() {
    let app = make_app(StaticBackend {
        properties: property_fixtures(3),
        ..Default::default()
    });

    get(&app, "/properties?view=list").unwrap();

    // A different visitor (no cookie) still gets the tile default.
    let body = read_body(get(&app, "/properties").unwrap());
    assert!(body.contains(r#"name="view" value="tile""#));
}

#[test]
fn unknown_path_is_not_found() {
    let app = make_app(StaticBackend::default());
    assert!(matches!(
        get(&app, "/nope"),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn stylesheet_is_served() {
    let app = make_app(StaticBackend::default());
    let resp = get(&app, "/static/main.css").unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css"
    );
}
