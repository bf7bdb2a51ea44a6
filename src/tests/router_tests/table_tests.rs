use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::tests::utils::{body_bytes, body_string, TestApp};

#[test]
fn home_and_overview_render() {
    let app = TestApp::seeded();

    let home = app.get("/");
    assert_eq!(home.status(), 200);
    assert!(body_string(home).contains("Commission tiers"));

    let overview = body_string(app.get("/admin"));
    assert!(overview.contains("Program overview"));
    assert!(overview.contains("/admin/commissions?status=pending"));
}

#[test]
fn every_admin_table_renders() {
    let app = TestApp::seeded();

    for path in [
        "/admin/commissions",
        "/admin/payouts",
        "/admin/affiliate-requests",
        "/admin/tickets",
    ] {
        let resp = app.get(path);
        assert_eq!(resp.status(), 200, "{path} should render");
        assert!(body_string(resp).contains("Page 1 of"), "{path} should show a pager");
    }
}

#[test]
fn commissions_paginate_and_filter_by_status() {
    let app = TestApp::seeded();

    let body = body_string(app.get("/admin/commissions"));
    assert!(body.contains("Page 1 of 5"));
    assert!(body.contains("48 matching"));

    let body = body_string(app.get("/admin/commissions?status=pending"));
    assert!(body.contains("Page 1 of 1"));
    assert!(body.contains("8 matching"));
}

#[test]
fn out_of_range_page_is_clamped() {
    let app = TestApp::seeded();

    let body = body_string(app.get("/admin/commissions?page=99"));
    assert!(body.contains("Page 5 of 5"));

    let body = body_string(app.get("/admin/commissions?page=0"));
    assert!(body.contains("Page 1 of 5"));
}

#[test]
fn search_matches_customer_names() {
    let app = TestApp::seeded();

    let body = body_string(app.get("/admin/commissions?q=JOHN+smith"));
    assert!(body.contains("John Smith"));
    assert!(!body.contains("Maria Garcia"));
}

#[test]
fn no_matches_shows_empty_state() {
    let app = TestApp::seeded();

    let body = body_string(app.get("/admin/tickets?q=zzzz-nothing"));
    assert!(body.contains("No rows match the current filters."));
    assert!(body.contains("Page 1 of 1"));
}

#[test]
fn sort_links_keep_page_by_default() {
    let app = TestApp::seeded();

    let body = body_string(app.get("/admin/commissions?page=3"));
    assert!(body.contains(r#"href="/admin/commissions?sort=amount&amp;dir=desc&amp;page=3""#));
}

#[test]
fn sort_links_reset_page_when_configured() {
    let mut config = AppConfig::default();
    config.table.reset_page_on_sort = true;
    let app = TestApp::with_config(config);
    crate::db::seed::seed_demo_data(app.db(), crate::tests::utils::fixed_now()).unwrap();

    let body = body_string(app.get("/admin/commissions?page=3"));
    assert!(body.contains(r#"href="/admin/commissions?sort=amount&amp;dir=desc""#));
}

#[test]
fn api_returns_page_snapshot() {
    let app = TestApp::seeded();

    let resp = app.get("/api/commissions?status=pending&sort=amount&dir=asc");
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["page"], 1);
    assert_eq!(json["total_pages"], 1);
    assert_eq!(json["filtered_count"], 8);
    assert_eq!(json["items_per_page"], 10);
    assert_eq!(json["sort"], "amount");
    assert_eq!(json["dir"], "asc");

    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r["status"] == "pending"));

    let amounts: Vec<i64> = rows.iter().map(|r| r["amount_cents"].as_i64().unwrap()).collect();
    let mut sorted = amounts.clone();
    sorted.sort();
    assert_eq!(amounts, sorted);
}

#[test]
fn export_is_an_xlsx_attachment() {
    let app = TestApp::seeded();

    let resp = app.get("/admin/payouts/export.xlsx?status=pending");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("payouts.xlsx"));
    assert!(body_bytes(resp).starts_with(b"PK"));
}

#[test]
fn unknown_paths_are_not_found() {
    let app = TestApp::new();

    assert!(matches!(app.try_get("/nope"), Err(ServerError::NotFound)));
    assert!(matches!(app.try_get("/admin/widgets"), Err(ServerError::NotFound)));
    assert!(matches!(app.try_get("/api/widgets"), Err(ServerError::NotFound)));
}

#[test]
fn errors_become_html_pages_with_their_status() {
    use crate::router::respond;
    use astra::Body;
    use http::{Method, Request};

    let app = TestApp::seeded();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/admin/widgets")
        .body(Body::empty())
        .unwrap();
    let resp = respond(req, &app.app);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));

    let req = Request::builder()
        .method(Method::POST)
        .uri("/admin/commissions/1/status")
        .body(Body::from("status=bogus".to_string()))
        .unwrap();
    let resp = respond(req, &app.app);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("unknown CommissionStatus"));
}
