// Column layouts for each admin export.
use crate::domain::affiliate_request::AffiliateRequest;
use crate::domain::commission::Commission;
use crate::domain::payout::Payout;
use crate::domain::ticket::SupportTicket;
use crate::spreadsheets::table_xlsx::{Cell, ExportRow};
use crate::table::RecordStatus;
use chrono::NaiveDateTime;
use std::borrow::Cow;

fn text(s: &str) -> Cell<'_> {
    Cell::Text(Cow::Borrowed(s))
}

fn timestamp<'a>(ts: &NaiveDateTime) -> Cell<'a> {
    Cell::Text(Cow::Owned(ts.format("%Y-%m-%d %H:%M:%S").to_string()))
}

fn dollars<'a>(cents: i64) -> Cell<'a> {
    Cell::Number(cents as f64 / 100.0)
}

impl ExportRow for Commission {
    const SHEET: &'static str = "Commissions";
    const HEADERS: &'static [&'static str] = &[
        "ID", "Date", "Affiliate", "Customer", "Customer email", "Order", "Program", "Amount (USD)", "Status",
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Number(self.id as f64),
            timestamp(&self.created_at),
            text(&self.affiliate_name),
            text(&self.customer_name),
            text(&self.customer_email),
            text(&self.order_ref),
            text(&self.program),
            dollars(self.amount_cents),
            text(self.status.label()),
        ]
    }
}

impl ExportRow for Payout {
    const SHEET: &'static str = "Payouts";
    const HEADERS: &'static [&'static str] = &[
        "ID", "Requested", "Affiliate", "Email", "Method", "Amount (USD)", "Status", "Processed",
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Number(self.id as f64),
            timestamp(&self.requested_at),
            text(&self.affiliate_name),
            text(&self.affiliate_email),
            text(self.method_label()),
            dollars(self.amount_cents),
            text(self.status.label()),
            self.processed_at.as_ref().map(timestamp).unwrap_or(text("")),
        ]
    }
}

impl ExportRow for AffiliateRequest {
    const SHEET: &'static str = "Applications";
    const HEADERS: &'static [&'static str] = &[
        "ID", "Submitted", "Name", "Email", "Website", "Country", "Message", "Status",
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Number(self.id as f64),
            timestamp(&self.submitted_at),
            text(&self.full_name),
            text(&self.email),
            text(self.website.as_deref().unwrap_or("")),
            text(&self.country),
            text(self.message.as_deref().unwrap_or("")),
            text(self.status.label()),
        ]
    }
}

impl ExportRow for SupportTicket {
    const SHEET: &'static str = "Tickets";
    const HEADERS: &'static [&'static str] = &[
        "ID", "Affiliate", "Subject", "Priority", "Opened", "Updated", "Status",
    ];

    fn cells(&self) -> Vec<Cell<'_>> {
        vec![
            Cell::Number(self.id as f64),
            text(&self.affiliate_name),
            text(&self.subject),
            text(&self.priority),
            timestamp(&self.created_at),
            timestamp(&self.updated_at),
            text(self.status.label()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payout::PayoutStatus;

    fn payout() -> Payout {
        Payout {
            id: 7,
            affiliate_id: 1,
            affiliate_name: "Ana Lima".into(),
            affiliate_email: "ana@example.com".into(),
            amount_cents: 12_345,
            method: "paypal".into(),
            status: PayoutStatus::Pending,
            requested_at: chrono::DateTime::from_timestamp(1_700_000_000, 0)
                .unwrap()
                .naive_utc(),
            processed_at: None,
        }
    }

    #[test]
    fn cells_line_up_with_headers() {
        let p = payout();
        assert_eq!(p.cells().len(), Payout::HEADERS.len());
    }

    #[test]
    fn amounts_are_exported_in_dollars() {
        let p = payout();
        match &p.cells()[5] {
            Cell::Number(n) => assert!((n - 123.45).abs() < 1e-9),
            Cell::Text(_) => panic!("amount should be numeric"),
        }
        match &p.cells()[4] {
            Cell::Text(t) => assert_eq!(t, "PayPal"),
            Cell::Number(_) => panic!("method should be text"),
        }
    }
}
