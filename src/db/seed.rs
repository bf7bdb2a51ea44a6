// src/db/seed.rs
use crate::db::affiliate_requests::insert_request;
use crate::db::affiliates::{count_affiliates, insert_affiliate};
use crate::db::commissions::{insert_commission, NewCommission};
use crate::db::connection::Database;
use crate::db::payouts::insert_payout;
use crate::db::tickets::insert_ticket;
use crate::domain::affiliate_request::NewAffiliateRequest;
use crate::domain::commission::CommissionStatus;
use crate::domain::payout::PayoutStatus;
use crate::errors::ServerError;
use chrono::{Duration, NaiveDateTime};
use tracing::info;

const AFFILIATES: &[(&str, &str, &str)] = &[
    ("Ana Lima", "ana@tradepartners.io", "BR"),
    ("Marcus Holt", "marcus@fxreviews.net", "GB"),
    ("Priya Nair", "priya@propfirmhub.com", "IN"),
    ("Jonas Weber", "jonas@chartschool.de", "DE"),
    ("Sofia Rossi", "sofia@tradingdiary.it", "IT"),
    ("Kenji Sato", "kenji@pipsjournal.jp", "JP"),
];

const CUSTOMERS: &[&str] = &[
    "John Smith",
    "Maria Garcia",
    "Liam Chen",
    "Olivia Brown",
    "Noah Wilson",
    "Emma Davis",
    "Lucas Martin",
    "Mia Thompson",
    "Ethan Moore",
    "Ava Taylor",
    "Mason Clark",
    "Isla Lewis",
];

const PROGRAMS: &[(&str, i64)] = &[
    ("evaluation", 1_500),
    ("funded", 4_500),
    ("competition", 800),
];

const APPLICANTS: &[(&str, &str, Option<&str>, &str)] = &[
    ("Daniel Park", "daniel@swingsetups.com", Some("https://swingsetups.com"), "KR"),
    ("Chloe Martin", "chloe@futurespulse.fr", Some("https://futurespulse.fr"), "FR"),
    ("Omar Haddad", "omar@gulftraders.ae", None, "AE"),
    ("Lena Novak", "lena@scalpstats.cz", Some("https://scalpstats.cz"), "CZ"),
    ("Tom Becker", "tom@indexwatch.de", None, "DE"),
    ("Grace Ochieng", "grace@nairobifx.ke", Some("https://nairobifx.ke"), "KE"),
    ("Mateo Silva", "mateo@daytradebr.com", Some("https://daytradebr.com"), "BR"),
    ("Hannah Kim", "hannah@optionsflow.us", None, "US"),
];

const COMMISSION_CYCLE: &[CommissionStatus] = &[
    CommissionStatus::Approved,
    CommissionStatus::Pending,
    CommissionStatus::Paid,
    CommissionStatus::Approved,
    CommissionStatus::Rejected,
    CommissionStatus::Paid,
];

/// Fill an empty store with a believable demo dataset. Returns whether
/// anything was inserted.
pub fn seed_demo_data(db: &Database, now: NaiveDateTime) -> Result<bool, ServerError> {
    db.with_conn(|conn| {
        if count_affiliates(conn)? > 0 {
            return Ok(false);
        }

        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut affiliate_ids = Vec::new();
        for (i, (name, email, country)) in AFFILIATES.iter().enumerate() {
            let joined = now - Duration::days(400 - i as i64 * 45);
            affiliate_ids.push(insert_affiliate(&tx, name, email, country, joined)?);
        }

        for i in 0..48usize {
            let affiliate_id = affiliate_ids[i % affiliate_ids.len()];
            let customer = CUSTOMERS[(i * 5) % CUSTOMERS.len()];
            let (program, base) = PROGRAMS[i % PROGRAMS.len()];
            insert_commission(
                &tx,
                &NewCommission {
                    affiliate_id,
                    customer_name: customer.to_string(),
                    customer_email: format!("{}@example.com", customer.to_lowercase().replace(' ', ".")),
                    order_ref: format!("ORD-{:05}", 10_000 + i * 7),
                    program: program.to_string(),
                    amount_cents: base + (i as i64 % 7) * 250,
                    status: COMMISSION_CYCLE[i % COMMISSION_CYCLE.len()],
                    created_at: now - Duration::hours(i as i64 * 31),
                },
            )?;
        }

        let payout_cycle = [
            (PayoutStatus::Completed, "bank_transfer"),
            (PayoutStatus::Pending, "paypal"),
            (PayoutStatus::Processing, "crypto"),
            (PayoutStatus::Rejected, "paypal"),
        ];
        for i in 0..12usize {
            let (status, method) = payout_cycle[i % payout_cycle.len()];
            insert_payout(
                &tx,
                affiliate_ids[i % affiliate_ids.len()],
                5_000 + i as i64 * 1_250,
                method,
                status,
                now - Duration::days(i as i64 * 4),
            )?;
        }

        for (i, (name, email, website, country)) in APPLICANTS.iter().enumerate() {
            insert_request(
                &tx,
                &NewAffiliateRequest {
                    full_name: name.to_string(),
                    email: email.to_string(),
                    website: website.map(str::to_string),
                    country: country.to_string(),
                    message: Some("I run a trading education channel and would like to promote your challenges.".to_string()),
                },
                now - Duration::hours(i as i64 * 20),
            )?;
        }

        let tickets = [
            ("Payout not received", "high"),
            ("Referral link tracking", "normal"),
            ("Change payout method", "low"),
            ("Commission missing for order", "urgent"),
            ("Marketing material request", "low"),
        ];
        for (i, (subject, priority)) in tickets.iter().enumerate() {
            insert_ticket(
                &tx,
                affiliate_ids[i % affiliate_ids.len()],
                subject,
                "Hi team, could you take a look at this for me? Thanks!",
                priority,
                now - Duration::hours(i as i64 * 9),
            )?;
        }

        tx.commit()
            .map_err(|e| ServerError::DbError(format!("commit seed failed: {e}")))?;

        info!(
            affiliates = affiliate_ids.len(),
            "seeded demo data into empty database"
        );
        Ok(true)
    })
}
