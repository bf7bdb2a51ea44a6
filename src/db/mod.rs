pub mod affiliate_requests;
pub mod affiliates;
pub mod commissions;
pub mod connection;
pub mod payouts;
pub mod seed;
pub mod tickets;

pub use connection::{init_db, Database};

use crate::errors::ServerError;
use rusqlite::{Connection, Params, Row};

/// Run `sql` and map every row, turning any failure into a `DbError`.
pub(crate) fn query_all<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: F,
) -> Result<Vec<T>, ServerError>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| ServerError::DbError(format!("prepare failed: {e}")))?;

    let rows = stmt
        .query_map(params, map)
        .map_err(|e| ServerError::DbError(format!("query failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(format!("row read failed: {e}")))?);
    }
    Ok(out)
}
