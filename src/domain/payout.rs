// src/domain/payout.rs
use crate::table::{RecordStatus, SortKey, TableRecord};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::borrow::Cow;

/// (key, label) for every accepted payout method.
pub const PAYOUT_METHODS: &[(&str, &str)] = &[
    ("bank_transfer", "Bank transfer"),
    ("paypal", "PayPal"),
    ("crypto", "Crypto (USDT)"),
];

pub fn is_known_method(method: &str) -> bool {
    PAYOUT_METHODS.iter().any(|(key, _)| *key == method)
}

keyed_enum! {
    pub enum PayoutStatus: RecordStatus {
        Pending => ("pending", "Pending"),
        Processing => ("processing", "Processing"),
        Completed => ("completed", "Completed"),
        Rejected => ("rejected", "Rejected"),
    }
}

impl PayoutStatus {
    pub fn can_transition_to(self, next: PayoutStatus) -> bool {
        use PayoutStatus::*;
        matches!(
            (self, next),
            (Pending, Processing) | (Pending, Rejected) | (Processing, Completed) | (Processing, Rejected)
        )
    }

    /// Money already promised to the affiliate, no longer withdrawable.
    pub fn is_committed(self) -> bool {
        !matches!(self, PayoutStatus::Rejected)
    }

    pub fn is_final(self) -> bool {
        matches!(self, PayoutStatus::Completed | PayoutStatus::Rejected)
    }
}

keyed_enum! {
    pub enum PayoutField: SortField {
        RequestedAt => ("requested", "Requested"),
        Amount => ("amount", "Amount"),
        Affiliate => ("affiliate", "Affiliate"),
        Method => ("method", "Method"),
        Status => ("status", "Status"),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Payout {
    pub id: i64,
    pub affiliate_id: i64,
    pub affiliate_name: String,
    pub affiliate_email: String,
    pub amount_cents: i64,
    pub method: String,
    pub status: PayoutStatus,
    pub requested_at: NaiveDateTime,
    pub processed_at: Option<NaiveDateTime>,
}

impl Payout {
    pub fn method_label(&self) -> &str {
        PAYOUT_METHODS
            .iter()
            .find(|(key, _)| *key == self.method)
            .map(|(_, label)| *label)
            .unwrap_or(self.method.as_str())
    }
}

impl TableRecord for Payout {
    type Status = PayoutStatus;
    type Field = PayoutField;

    const DEFAULT_SORT: PayoutField = PayoutField::RequestedAt;

    fn status(&self) -> PayoutStatus {
        self.status
    }

    fn category(&self) -> Option<&str> {
        Some(&self.method)
    }

    fn searchable(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.to_string()),
            Cow::Borrowed(&self.affiliate_name),
            Cow::Borrowed(&self.affiliate_email),
            Cow::Borrowed(&self.method),
        ]
    }

    fn sort_key(&self, field: PayoutField) -> SortKey<'_> {
        match field {
            PayoutField::RequestedAt => SortKey::Date(Some(self.requested_at)),
            PayoutField::Amount => SortKey::cents(self.amount_cents),
            PayoutField::Affiliate => SortKey::text(&self.affiliate_name),
            PayoutField::Method => SortKey::text(&self.method),
            PayoutField::Status => SortKey::text(self.status.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        use PayoutStatus::*;
        assert!(Pending.can_transition_to(Processing));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Processing.can_transition_to(Completed));
        assert!(Processing.can_transition_to(Rejected));

        assert!(!Pending.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Pending));
    }

    #[test]
    fn methods() {
        assert!(is_known_method("paypal"));
        assert!(!is_known_method("cheque"));
    }
}
