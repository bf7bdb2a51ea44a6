use crate::db::affiliate_requests::list_requests;
use crate::domain::affiliate_request::RequestStatus;
use crate::tests::utils::{body_string, location, TestApp};

#[test]
fn application_is_queued_for_review() {
    let app = TestApp::new();

    let resp = app
        .post_form(
            "/apply",
            "full_name=Daniel+Park&email=daniel%40swingsetups.com&country=kr&website=https%3A%2F%2Fswingsetups.com&message=",
        )
        .expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/apply?submitted=1");

    let requests = app.db().with_conn(|conn| list_requests(conn)).unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].country, "KR");
    assert_eq!(requests[0].website.as_deref(), Some("https://swingsetups.com"));
    assert_eq!(requests[0].message, None);
    assert_eq!(requests[0].status, RequestStatus::Pending);

    let body = body_string(app.get("/apply?submitted=1"));
    assert!(body.contains("Your application is in the queue"));

    let listing = body_string(app.get("/admin/affiliate-requests?status=pending"));
    assert!(listing.contains("Daniel Park"));
}

#[test]
fn invalid_application_redisplays_the_form() {
    let app = TestApp::new();

    let resp = app
        .post_form("/apply", "full_name=Daniel&email=not-an-email&country=KR")
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("is not a valid email"));
    assert!(body.contains(r#"action="/apply""#));

    let requests = app.db().with_conn(|conn| list_requests(conn)).unwrap();
    assert!(requests.is_empty());
}
