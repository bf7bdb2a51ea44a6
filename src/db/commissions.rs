// src/db/commissions.rs
use crate::db::query_all;
use crate::domain::commission::{Commission, CommissionStatus};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_COMMISSIONS: &str = r#"
    select
        c.id,
        c.affiliate_id,
        a.full_name,
        c.customer_name,
        c.customer_email,
        c.order_ref,
        c.program,
        c.amount_cents,
        c.status,
        c.created_at
    from commissions c
    join affiliates a on a.id = c.affiliate_id
"#;

#[derive(Debug, Clone)]
pub struct NewCommission {
    pub affiliate_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub order_ref: String,
    pub program: String,
    pub amount_cents: i64,
    pub status: CommissionStatus,
    pub created_at: NaiveDateTime,
}

fn map_commission(row: &Row<'_>) -> rusqlite::Result<Commission> {
    Ok(Commission {
        id: row.get(0)?,
        affiliate_id: row.get(1)?,
        affiliate_name: row.get(2)?,
        customer_name: row.get(3)?,
        customer_email: row.get(4)?,
        order_ref: row.get(5)?,
        program: row.get(6)?,
        amount_cents: row.get(7)?,
        status: row.get(8)?,
        created_at: row.get(9)?,
    })
}

pub fn list_commissions(conn: &Connection) -> Result<Vec<Commission>, ServerError> {
    query_all(conn, &format!("{SELECT_COMMISSIONS} order by c.id"), [], map_commission)
}

pub fn get_commission(conn: &Connection, id: i64) -> Result<Option<Commission>, ServerError> {
    conn.query_row(
        &format!("{SELECT_COMMISSIONS} where c.id = ?"),
        params![id],
        map_commission,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load commission failed: {e}")))
}

pub fn insert_commission(conn: &Connection, new: &NewCommission) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into commissions
            (affiliate_id, customer_name, customer_email, order_ref, program, amount_cents, status, created_at)
        values (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            new.affiliate_id,
            new.customer_name,
            new.customer_email,
            new.order_ref,
            new.program,
            new.amount_cents,
            new.status,
            new.created_at,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert commission failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Moves a commission to `next`, rejecting transitions the workflow forbids.
pub fn transition_commission(
    conn: &Connection,
    id: i64,
    next: CommissionStatus,
) -> Result<CommissionStatus, ServerError> {
    let current = get_commission(conn, id)?
        .ok_or(ServerError::NotFound)?
        .status;

    if !current.can_transition_to(next) {
        return Err(ServerError::BadRequest(format!(
            "commission {id} cannot move from {current} to {next}"
        )));
    }

    replace_status(conn, id, current, next)?;
    Ok(current)
}

/// Writes `next` only if the row still holds `expected`.
fn replace_status(
    conn: &Connection,
    id: i64,
    expected: CommissionStatus,
    next: CommissionStatus,
) -> Result<(), ServerError> {
    let updated = conn
        .execute(
            "update commissions set status = ? where id = ? and status = ?",
            params![next, id, expected],
        )
        .map_err(|e| ServerError::DbError(format!("update commission failed: {e}")))?;

    if updated == 0 {
        return Err(ServerError::BadRequest(format!(
            "commission {id} is no longer {expected}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::affiliates::insert_affiliate;
    use crate::db::{init_db, Database};

    fn at() -> NaiveDateTime {
        chrono::DateTime::from_timestamp(1_700_000_000, 0)
            .unwrap()
            .naive_utc()
    }

    #[test]
    fn stale_status_does_not_overwrite_a_concurrent_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("race.sqlite3");
        let db = Database::new(path.to_string_lossy().into_owned());
        init_db(&db).unwrap();

        let id = db
            .with_conn(|conn| {
                let affiliate_id = insert_affiliate(conn, "Ana", "ana@example.com", "BR", at())?;
                insert_commission(
                    conn,
                    &NewCommission {
                        affiliate_id,
                        customer_name: "John Smith".into(),
                        customer_email: "john@example.com".into(),
                        order_ref: "ORD-1".into(),
                        program: "funded".into(),
                        amount_cents: 4_500,
                        status: CommissionStatus::Pending,
                        created_at: at(),
                    },
                )
            })
            .unwrap();

        // This request has read `pending`...
        let seen = db
            .with_conn(|conn| get_commission(conn, id))
            .unwrap()
            .unwrap()
            .status;
        assert_eq!(seen, CommissionStatus::Pending);

        // ...while another worker approves the row.
        let other = Connection::open(&path).unwrap();
        transition_commission(&other, id, CommissionStatus::Approved).unwrap();

        let result = db.with_conn(|conn| replace_status(conn, id, seen, CommissionStatus::Rejected));
        assert!(matches!(result, Err(ServerError::BadRequest(_))));

        let stored = db.with_conn(|conn| get_commission(conn, id)).unwrap().unwrap();
        assert_eq!(stored.status, CommissionStatus::Approved);

        // Re-reading sees the new state and refuses the forbidden edge.
        let again = db.with_conn(|conn| transition_commission(conn, id, CommissionStatus::Rejected));
        assert!(matches!(again, Err(ServerError::BadRequest(_))));
    }
}
