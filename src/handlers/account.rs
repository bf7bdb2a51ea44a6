use crate::db::affiliates::{affiliate_stats, get_affiliate};
use crate::db::payouts::{insert_payout, list_payouts_for_affiliate};
use crate::db::tickets::{insert_ticket, list_tickets_for_affiliate};
use crate::domain::money::{format_cents, parse_dollars};
use crate::domain::payout::{is_known_method, PayoutStatus};
use crate::domain::ticket::TICKET_PRIORITIES;
use crate::errors::ServerError;
use crate::handlers::{now, optional, required};
use crate::responses::{html_response, redirect, ResultResp};
use crate::router::App;
use crate::table::QueryParams;
use crate::templates::pages::{account_page, AccountVm};
use rusqlite::TransactionBehavior;
use tracing::info;

fn notice_text(params: &QueryParams) -> Option<String> {
    match params.get("notice").map(String::as_str) {
        Some("payout") => Some("Payout request received. We'll process it shortly.".to_string()),
        Some("ticket") => Some("Ticket opened. Our team will get back to you.".to_string()),
        _ => None,
    }
}

pub fn show(app: &App, affiliate_id: i64, params: &QueryParams) -> ResultResp {
    let now_unix = chrono::Utc::now().timestamp();

    let vm = app.db.with_conn(|conn| {
        let affiliate = get_affiliate(conn, affiliate_id)?.ok_or(ServerError::NotFound)?;
        Ok(AccountVm {
            stats: affiliate_stats(conn, affiliate_id, now_unix)?,
            payouts: list_payouts_for_affiliate(conn, affiliate_id)?,
            tickets: list_tickets_for_affiliate(conn, affiliate_id)?,
            affiliate,
            minimum_payout_cents: app.config.payouts.minimum_cents,
            flash: notice_text(params),
        })
    })?;

    html_response(account_page(&vm))
}

pub fn request_payout(app: &App, affiliate_id: i64, form: &QueryParams) -> ResultResp {
    let amount_cents = parse_dollars(required(form, "amount")?)?;
    let method = required(form, "method")?;
    if !is_known_method(method) {
        return Err(ServerError::BadRequest(format!("unknown payout method '{method}'")));
    }

    let minimum = app.config.payouts.minimum_cents;
    let now_unix = chrono::Utc::now().timestamp();

    let payout_id = app.db.with_conn(|conn| {
        // Balance read and insert must not interleave with another request.
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        get_affiliate(&tx, affiliate_id)?.ok_or(ServerError::NotFound)?;
        let available = affiliate_stats(&tx, affiliate_id, now_unix)?.available_balance_cents();

        if amount_cents < minimum {
            return Err(ServerError::BadRequest(format!(
                "the minimum payout is {}",
                format_cents(minimum)
            )));
        }
        if amount_cents > available {
            return Err(ServerError::BadRequest(format!(
                "requested {} but only {} is available",
                format_cents(amount_cents),
                format_cents(available)
            )));
        }

        let id = insert_payout(&tx, affiliate_id, amount_cents, method, PayoutStatus::Pending, now())?;
        tx.commit()
            .map_err(|e| ServerError::DbError(format!("commit payout failed: {e}")))?;
        Ok(id)
    })?;

    info!(affiliate_id, payout_id, amount_cents, method, "payout requested");
    redirect(&format!("/affiliates/{affiliate_id}?notice=payout"))
}

pub fn open_ticket(app: &App, affiliate_id: i64, form: &QueryParams) -> ResultResp {
    let subject = required(form, "subject")?;
    let body = required(form, "body")?;
    let priority = optional(form, "priority").unwrap_or("normal");
    if !TICKET_PRIORITIES.contains(&priority) {
        return Err(ServerError::BadRequest(format!("unknown priority '{priority}'")));
    }

    let ticket_id = app.db.with_conn(|conn| {
        get_affiliate(conn, affiliate_id)?.ok_or(ServerError::NotFound)?;
        insert_ticket(conn, affiliate_id, subject, body, priority, now())
    })?;

    info!(affiliate_id, ticket_id, priority, "support ticket opened");
    redirect(&format!("/affiliates/{affiliate_id}?notice=ticket"))
}
