// src/db/tickets.rs
use crate::db::query_all;
use crate::domain::ticket::{SupportTicket, TicketStatus};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_TICKETS: &str = r#"
    select
        t.id,
        t.affiliate_id,
        a.full_name,
        t.subject,
        t.body,
        t.priority,
        t.status,
        t.created_at,
        t.updated_at
    from support_tickets t
    join affiliates a on a.id = t.affiliate_id
"#;

fn map_ticket(row: &Row<'_>) -> rusqlite::Result<SupportTicket> {
    Ok(SupportTicket {
        id: row.get(0)?,
        affiliate_id: row.get(1)?,
        affiliate_name: row.get(2)?,
        subject: row.get(3)?,
        body: row.get(4)?,
        priority: row.get(5)?,
        status: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

pub fn list_tickets(conn: &Connection) -> Result<Vec<SupportTicket>, ServerError> {
    query_all(conn, &format!("{SELECT_TICKETS} order by t.id"), [], map_ticket)
}

pub fn list_tickets_for_affiliate(
    conn: &Connection,
    affiliate_id: i64,
) -> Result<Vec<SupportTicket>, ServerError> {
    query_all(
        conn,
        &format!("{SELECT_TICKETS} where t.affiliate_id = ? order by t.updated_at desc, t.id desc"),
        params![affiliate_id],
        map_ticket,
    )
}

pub fn get_ticket(conn: &Connection, id: i64) -> Result<Option<SupportTicket>, ServerError> {
    conn.query_row(
        &format!("{SELECT_TICKETS} where t.id = ?"),
        params![id],
        map_ticket,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load ticket failed: {e}")))
}

pub fn insert_ticket(
    conn: &Connection,
    affiliate_id: i64,
    subject: &str,
    body: &str,
    priority: &str,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into support_tickets (affiliate_id, subject, body, priority, status, created_at, updated_at)
        values (?, ?, ?, ?, ?, ?, ?)
        "#,
        params![affiliate_id, subject, body, priority, TicketStatus::Open, now, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert ticket failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

pub fn transition_ticket(
    conn: &Connection,
    id: i64,
    next: TicketStatus,
    now: NaiveDateTime,
) -> Result<TicketStatus, ServerError> {
    let current = get_ticket(conn, id)?.ok_or(ServerError::NotFound)?.status;

    if !current.can_transition_to(next) {
        return Err(ServerError::BadRequest(format!(
            "ticket {id} cannot move from {current} to {next}"
        )));
    }

    let updated = conn
        .execute(
            "update support_tickets set status = ?, updated_at = ? where id = ? and status = ?",
            params![next, now, id, current],
        )
        .map_err(|e| ServerError::DbError(format!("update ticket failed: {e}")))?;

    if updated == 0 {
        return Err(ServerError::BadRequest(format!(
            "ticket {id} is no longer {current}"
        )));
    }

    Ok(current)
}
