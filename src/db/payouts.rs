// src/db/payouts.rs
use crate::db::query_all;
use crate::domain::payout::{Payout, PayoutStatus};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_PAYOUTS: &str = r#"
    select
        p.id,
        p.affiliate_id,
        a.full_name,
        a.email,
        p.amount_cents,
        p.method,
        p.status,
        p.requested_at,
        p.processed_at
    from payouts p
    join affiliates a on a.id = p.affiliate_id
"#;

fn map_payout(row: &Row<'_>) -> rusqlite::Result<Payout> {
    Ok(Payout {
        id: row.get(0)?,
        affiliate_id: row.get(1)?,
        affiliate_name: row.get(2)?,
        affiliate_email: row.get(3)?,
        amount_cents: row.get(4)?,
        method: row.get(5)?,
        status: row.get(6)?,
        requested_at: row.get(7)?,
        processed_at: row.get(8)?,
    })
}

pub fn list_payouts(conn: &Connection) -> Result<Vec<Payout>, ServerError> {
    query_all(conn, &format!("{SELECT_PAYOUTS} order by p.id"), [], map_payout)
}

pub fn list_payouts_for_affiliate(
    conn: &Connection,
    affiliate_id: i64,
) -> Result<Vec<Payout>, ServerError> {
    query_all(
        conn,
        &format!("{SELECT_PAYOUTS} where p.affiliate_id = ? order by p.requested_at desc, p.id desc"),
        params![affiliate_id],
        map_payout,
    )
}

pub fn get_payout(conn: &Connection, id: i64) -> Result<Option<Payout>, ServerError> {
    conn.query_row(
        &format!("{SELECT_PAYOUTS} where p.id = ?"),
        params![id],
        map_payout,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load payout failed: {e}")))
}

pub fn insert_payout(
    conn: &Connection,
    affiliate_id: i64,
    amount_cents: i64,
    method: &str,
    status: PayoutStatus,
    requested_at: NaiveDateTime,
) -> Result<i64, ServerError> {
    let processed_at = status.is_final().then_some(requested_at);

    conn.execute(
        r#"
        insert into payouts (affiliate_id, amount_cents, method, status, requested_at, processed_at)
        values (?, ?, ?, ?, ?, ?)
        "#,
        params![affiliate_id, amount_cents, method, status, requested_at, processed_at],
    )
    .map_err(|e| ServerError::DbError(format!("insert payout failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Moves a payout to `next`; final states stamp `processed_at`.
pub fn transition_payout(
    conn: &Connection,
    id: i64,
    next: PayoutStatus,
    now: NaiveDateTime,
) -> Result<PayoutStatus, ServerError> {
    let current = get_payout(conn, id)?.ok_or(ServerError::NotFound)?.status;

    if !current.can_transition_to(next) {
        return Err(ServerError::BadRequest(format!(
            "payout {id} cannot move from {current} to {next}"
        )));
    }

    let processed_at = next.is_final().then_some(now);
    let updated = conn
        .execute(
            "update payouts set status = ?, processed_at = ? where id = ? and status = ?",
            params![next, processed_at, id, current],
        )
        .map_err(|e| ServerError::DbError(format!("update payout failed: {e}")))?;

    if updated == 0 {
        return Err(ServerError::BadRequest(format!(
            "payout {id} is no longer {current}"
        )));
    }

    Ok(current)
}
