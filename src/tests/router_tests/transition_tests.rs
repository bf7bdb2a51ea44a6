use crate::db::affiliate_requests::list_requests;
use crate::db::affiliates::count_affiliates;
use crate::db::commissions::{get_commission, list_commissions};
use crate::db::payouts::{get_payout, list_payouts};
use crate::db::tickets::{get_ticket, list_tickets};
use crate::domain::affiliate_request::RequestStatus;
use crate::domain::commission::CommissionStatus;
use crate::domain::payout::PayoutStatus;
use crate::domain::ticket::TicketStatus;
use crate::errors::ServerError;
use crate::tests::utils::{is_bad_request, location, TestApp};

fn first_commission_with(app: &TestApp, status: CommissionStatus) -> i64 {
    app.db()
        .with_conn(|conn| list_commissions(conn))
        .unwrap()
        .into_iter()
        .find(|c| c.status == status)
        .expect("seeded commission with status")
        .id
}

#[test]
fn approving_a_commission_persists_and_redirects_back() {
    let app = TestApp::seeded();
    let id = first_commission_with(&app, CommissionStatus::Pending);

    let resp = app
        .post_form(
            &format!("/admin/commissions/{id}/status"),
            "status=approved&return_to=%2Fadmin%2Fcommissions%3Fstatus%3Dpending%26page%3D2",
        )
        .expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/admin/commissions?status=pending&page=2");

    let stored = app.db().with_conn(|conn| get_commission(conn, id)).unwrap().unwrap();
    assert_eq!(stored.status, CommissionStatus::Approved);
}

#[test]
fn illegal_transition_is_rejected() {
    let app = TestApp::seeded();
    let id = first_commission_with(&app, CommissionStatus::Paid);

    let result = app.post_form(&format!("/admin/commissions/{id}/status"), "status=pending");
    assert!(is_bad_request(&result));

    let stored = app.db().with_conn(|conn| get_commission(conn, id)).unwrap().unwrap();
    assert_eq!(stored.status, CommissionStatus::Paid);
}

#[test]
fn unknown_status_or_row_is_an_error() {
    let app = TestApp::seeded();
    let id = first_commission_with(&app, CommissionStatus::Pending);

    let result = app.post_form(&format!("/admin/commissions/{id}/status"), "status=bogus");
    assert!(is_bad_request(&result));

    let result = app.post_form("/admin/commissions/99999/status", "status=approved");
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn offsite_return_to_falls_back_to_the_table() {
    let app = TestApp::seeded();
    let id = first_commission_with(&app, CommissionStatus::Pending);

    let resp = app
        .post_form(
            &format!("/admin/commissions/{id}/status"),
            "status=rejected&return_to=https%3A%2F%2Fevil.example",
        )
        .expect("Handler failed");

    assert_eq!(location(&resp), "/admin/commissions");
}

#[test]
fn payout_processing_sets_processed_at_when_final() {
    let app = TestApp::seeded();
    let payout = app
        .db()
        .with_conn(|conn| list_payouts(conn))
        .unwrap()
        .into_iter()
        .find(|p| p.status == PayoutStatus::Processing)
        .unwrap();

    let resp = app
        .post_form(&format!("/admin/payouts/{}/status", payout.id), "status=completed")
        .expect("Handler failed");
    assert_eq!(location(&resp), "/admin/payouts");

    let stored = app.db().with_conn(|conn| get_payout(conn, payout.id)).unwrap().unwrap();
    assert_eq!(stored.status, PayoutStatus::Completed);
    assert!(stored.processed_at.is_some());
}

#[test]
fn approving_an_application_creates_the_affiliate() {
    let app = TestApp::seeded();
    let before = app.db().with_conn(|conn| count_affiliates(conn)).unwrap();
    let request = app
        .db()
        .with_conn(|conn| list_requests(conn))
        .unwrap()
        .into_iter()
        .next()
        .unwrap();

    let resp = app
        .post_form(
            &format!("/admin/affiliate-requests/{}/status", request.id),
            "status=approved",
        )
        .expect("Handler failed");
    assert_eq!(resp.status(), 302);

    let after = app.db().with_conn(|conn| count_affiliates(conn)).unwrap();
    assert_eq!(after, before + 1);

    // Reviewed applications can't be reviewed again.
    let again = app.post_form(
        &format!("/admin/affiliate-requests/{}/status", request.id),
        "status=rejected",
    );
    assert!(is_bad_request(&again));

    let stored = app
        .db()
        .with_conn(|conn| list_requests(conn))
        .unwrap()
        .into_iter()
        .find(|r| r.id == request.id)
        .unwrap();
    assert_eq!(stored.status, RequestStatus::Approved);
    assert!(stored.reviewed_at.is_some());
}

#[test]
fn ticket_moves_through_its_workflow() {
    let app = TestApp::seeded();
    let ticket = app
        .db()
        .with_conn(|conn| list_tickets(conn))
        .unwrap()
        .into_iter()
        .next()
        .unwrap();
    assert_eq!(ticket.status, TicketStatus::Open);

    for next in ["in_progress", "resolved", "closed"] {
        let resp = app
            .post_form(
                &format!("/admin/tickets/{}/status", ticket.id),
                &format!("status={next}"),
            )
            .expect("Handler failed");
        assert_eq!(resp.status(), 302);
    }

    let stored = app.db().with_conn(|conn| get_ticket(conn, ticket.id)).unwrap().unwrap();
    assert_eq!(stored.status, TicketStatus::Closed);
    assert!(stored.updated_at > ticket.updated_at);
}
