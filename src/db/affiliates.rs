// src/db/affiliates.rs
use crate::domain::affiliate::{Affiliate, AffiliateStats};
use crate::domain::commission::CommissionStatus;
use crate::domain::payout::PayoutStatus;
use crate::errors::ServerError;
use crate::table::RecordStatus;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use time::OffsetDateTime;

/// Insert an affiliate, or return the existing id when the email is taken.
pub fn insert_affiliate(
    conn: &Connection,
    full_name: &str,
    email: &str,
    country: &str,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert or ignore into affiliates (full_name, email, country, joined_at) values (?, ?, ?, ?)",
        params![full_name, email, country, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert affiliate failed: {e}")))?;

    conn.query_row(
        "select id from affiliates where email = ?",
        params![email],
        |row| row.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select affiliate id failed: {e}")))
}

pub fn get_affiliate(conn: &Connection, id: i64) -> Result<Option<Affiliate>, ServerError> {
    conn.query_row(
        "select id, full_name, email, country, joined_at from affiliates where id = ?",
        params![id],
        |row| {
            Ok(Affiliate {
                id: row.get(0)?,
                full_name: row.get(1)?,
                email: row.get(2)?,
                country: row.get(3)?,
                joined_at: row.get(4)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load affiliate failed: {e}")))
}

pub fn count_affiliates(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from affiliates", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count affiliates failed: {e}")))
}

/// Start of the UTC calendar month containing `now` (unix seconds).
pub fn start_of_month(now: i64) -> i64 {
    let dt = OffsetDateTime::from_unix_timestamp(now).unwrap_or_else(|_| OffsetDateTime::now_utc());

    dt.replace_day(1)
        .unwrap_or(dt) // Day 1 is valid for every month
        .replace_time(time::Time::MIDNIGHT)
        .unix_timestamp()
}

/// SQL `in (...)` body listing the keys of every status `keep` accepts.
fn status_list<S: RecordStatus>(keep: impl Fn(S) -> bool) -> String {
    S::ALL
        .iter()
        .copied()
        .filter(|s| keep(*s))
        .map(|s| format!("'{}'", s.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Earnings, referrals and payout totals for the account page.
pub fn affiliate_stats(
    conn: &Connection,
    affiliate_id: i64,
    now: i64,
) -> Result<AffiliateStats, ServerError> {
    let month_start = chrono::DateTime::from_timestamp(start_of_month(now), 0)
        .map(|dt| dt.naive_utc())
        .ok_or(ServerError::InternalError)?;

    let earned = status_list(CommissionStatus::is_earned);
    let (lifetime, this_month, pending, referrals): (i64, i64, i64, i64) = conn
        .query_row(
            &format!(
                r#"
                select
                    coalesce(sum(case when status in ({earned}) then amount_cents end), 0),
                    coalesce(sum(case when status in ({earned}) and created_at >= ?2 then amount_cents end), 0),
                    coalesce(sum(case when status = ?3 then amount_cents end), 0),
                    count(distinct case when status != ?4 then lower(customer_email) end)
                from commissions
                where affiliate_id = ?1
                "#
            ),
            params![
                affiliate_id,
                month_start,
                CommissionStatus::Pending,
                CommissionStatus::Rejected
            ],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
        )
        .map_err(|e| ServerError::DbError(format!("commission totals failed: {e}")))?;

    let committed_statuses = status_list(PayoutStatus::is_committed);
    let committed: i64 = conn
        .query_row(
            &format!(
                "select coalesce(sum(amount_cents), 0) from payouts \
                 where affiliate_id = ? and status in ({committed_statuses})"
            ),
            params![affiliate_id],
            |r| r.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("payout totals failed: {e}")))?;

    Ok(AffiliateStats {
        lifetime_earnings_cents: lifetime,
        referrals,
        earned_this_month_cents: this_month,
        pending_commissions_cents: pending,
        committed_payouts_cents: committed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_start_is_first_midnight() {
        // 2024-03-17 15:04:05 UTC
        let now = 1_710_687_845;
        // 2024-03-01 00:00:00 UTC
        assert_eq!(start_of_month(now), 1_709_251_200);
    }

    #[test]
    fn status_lists_follow_the_domain_rules() {
        assert_eq!(status_list(CommissionStatus::is_earned), "'approved', 'paid'");
        assert_eq!(
            status_list(PayoutStatus::is_committed),
            "'pending', 'processing', 'completed'"
        );
    }
}
