// src/db/affiliate_requests.rs
use crate::db::affiliates::insert_affiliate;
use crate::db::query_all;
use crate::domain::affiliate_request::{AffiliateRequest, NewAffiliateRequest, RequestStatus};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};
use tracing::info;

const SELECT_REQUESTS: &str = r#"
    select id, full_name, email, website, country, message, status, submitted_at, reviewed_at
    from affiliate_requests
"#;

fn map_request(row: &Row<'_>) -> rusqlite::Result<AffiliateRequest> {
    Ok(AffiliateRequest {
        id: row.get(0)?,
        full_name: row.get(1)?,
        email: row.get(2)?,
        website: row.get(3)?,
        country: row.get(4)?,
        message: row.get(5)?,
        status: row.get(6)?,
        submitted_at: row.get(7)?,
        reviewed_at: row.get(8)?,
    })
}

pub fn list_requests(conn: &Connection) -> Result<Vec<AffiliateRequest>, ServerError> {
    query_all(conn, &format!("{SELECT_REQUESTS} order by id"), [], map_request)
}

pub fn get_request(conn: &Connection, id: i64) -> Result<Option<AffiliateRequest>, ServerError> {
    conn.query_row(
        &format!("{SELECT_REQUESTS} where id = ?"),
        params![id],
        map_request,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load affiliate request failed: {e}")))
}

pub fn insert_request(
    conn: &Connection,
    new: &NewAffiliateRequest,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into affiliate_requests (full_name, email, website, country, message, status, submitted_at)
        values (?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            new.full_name,
            new.email,
            new.website,
            new.country,
            new.message,
            RequestStatus::Pending,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert affiliate request failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Approve or reject a pending application. Approval creates the affiliate
/// account in the same transaction and returns its id.
pub fn review_request(
    conn: &mut Connection,
    id: i64,
    decision: RequestStatus,
    now: NaiveDateTime,
) -> Result<Option<i64>, ServerError> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let request = get_request(&tx, id)?.ok_or(ServerError::NotFound)?;
    if !request.status.can_transition_to(decision) {
        return Err(ServerError::BadRequest(format!(
            "application {id} is already {}",
            request.status
        )));
    }

    tx.execute(
        "update affiliate_requests set status = ?, reviewed_at = ? where id = ?",
        params![decision, now, id],
    )
    .map_err(|e| ServerError::DbError(format!("review affiliate request failed: {e}")))?;

    let affiliate_id = if decision == RequestStatus::Approved {
        let affiliate_id = insert_affiliate(
            &tx,
            &request.full_name,
            &request.email,
            &request.country,
            now,
        )?;
        info!(request_id = id, affiliate_id, "affiliate application approved");
        Some(affiliate_id)
    } else {
        info!(request_id = id, "affiliate application rejected");
        None
    };

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit review failed: {e}")))?;

    Ok(affiliate_id)
}
