use crate::db::affiliates::insert_affiliate;
use crate::db::commissions::{insert_commission, NewCommission};
use crate::db::payouts::list_payouts_for_affiliate;
use crate::db::tickets::list_tickets_for_affiliate;
use crate::domain::commission::CommissionStatus;
use crate::domain::payout::PayoutStatus;
use crate::domain::ticket::TicketStatus;
use crate::errors::ServerError;
use crate::tests::utils::{body_string, fixed_now, is_bad_request, location, TestApp};

/// One affiliate with $200.00 approved and $40.00 pending.
fn affiliate_with_balance(app: &TestApp) -> i64 {
    app.db()
        .with_conn(|conn| {
            let id = insert_affiliate(conn, "Ana Lima", "ana@example.com", "BR", fixed_now())?;
            for (i, (amount_cents, status)) in [
                (12_000, CommissionStatus::Approved),
                (8_000, CommissionStatus::Paid),
                (4_000, CommissionStatus::Pending),
            ]
            .into_iter()
            .enumerate()
            {
                insert_commission(
                    conn,
                    &NewCommission {
                        affiliate_id: id,
                        customer_name: format!("Customer {i}"),
                        customer_email: format!("customer{i}@example.com"),
                        order_ref: format!("ORD-{i}"),
                        program: "evaluation".to_string(),
                        amount_cents,
                        status,
                        created_at: fixed_now(),
                    },
                )?;
            }
            Ok(id)
        })
        .unwrap()
}

#[test]
fn account_page_shows_balance_and_tier() {
    let app = TestApp::new();
    let id = affiliate_with_balance(&app);

    let resp = app.get(&format!("/affiliates/{id}"));
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Ana Lima"));
    assert!(body.contains("$200.00"));
    assert!(body.contains("$40.00"));
    assert!(body.contains("Current tier: <strong>Bronze</strong>"));
}

#[test]
fn unknown_affiliate_is_not_found() {
    let app = TestApp::new();
    assert!(matches!(app.try_get("/affiliates/42"), Err(ServerError::NotFound)));
    assert!(matches!(app.try_get("/affiliates/abc"), Err(ServerError::NotFound)));
}

#[test]
fn payout_request_within_balance_is_stored() {
    let app = TestApp::new();
    let id = affiliate_with_balance(&app);

    let resp = app
        .post_form(&format!("/affiliates/{id}/payouts"), "amount=75.50&method=paypal")
        .expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), format!("/affiliates/{id}?notice=payout"));

    let payouts = app
        .db()
        .with_conn(|conn| list_payouts_for_affiliate(conn, id))
        .unwrap();
    assert_eq!(payouts.len(), 1);
    assert_eq!(payouts[0].amount_cents, 7_550);
    assert_eq!(payouts[0].status, PayoutStatus::Pending);

    let body = body_string(app.get(&format!("/affiliates/{id}?notice=payout")));
    assert!(body.contains("Payout request received."));
    assert!(body.contains("$124.50"));
}

#[test]
fn payout_request_is_validated() {
    let app = TestApp::new();
    let id = affiliate_with_balance(&app);
    let uri = format!("/affiliates/{id}/payouts");

    // Below the $50.00 minimum.
    assert!(is_bad_request(&app.post_form(&uri, "amount=10&method=paypal")));
    // More than the $200.00 available.
    assert!(is_bad_request(&app.post_form(&uri, "amount=200.01&method=paypal")));
    assert!(is_bad_request(&app.post_form(&uri, "amount=60&method=cheque")));
    assert!(is_bad_request(&app.post_form(&uri, "amount=lots&method=paypal")));
    assert!(is_bad_request(&app.post_form(&uri, "method=paypal")));

    let payouts = app
        .db()
        .with_conn(|conn| list_payouts_for_affiliate(conn, id))
        .unwrap();
    assert!(payouts.is_empty());

    // The whole balance is allowed.
    let resp = app.post_form(&uri, "amount=200&method=crypto").expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert!(is_bad_request(&app.post_form(&uri, "amount=50&method=crypto")));
}

#[test]
fn opening_a_ticket() {
    let app = TestApp::new();
    let id = affiliate_with_balance(&app);

    let resp = app
        .post_form(
            &format!("/affiliates/{id}/tickets"),
            "subject=Missing+commission&body=Order+ORD-9+is+not+listed&priority=high",
        )
        .expect("Handler failed");
    assert_eq!(location(&resp), format!("/affiliates/{id}?notice=ticket"));

    let tickets = app
        .db()
        .with_conn(|conn| list_tickets_for_affiliate(conn, id))
        .unwrap();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].subject, "Missing commission");
    assert_eq!(tickets[0].priority, "high");
    assert_eq!(tickets[0].status, TicketStatus::Open);

    let result = app.post_form(
        &format!("/affiliates/{id}/tickets"),
        "subject=Hi&body=Hello&priority=whenever",
    );
    assert!(is_bad_request(&result));
}
