// src/domain/commission.rs
use crate::table::{RecordStatus, SortKey, TableRecord};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::borrow::Cow;

keyed_enum! {
    pub enum CommissionStatus: RecordStatus {
        Pending => ("pending", "Pending"),
        Approved => ("approved", "Approved"),
        Paid => ("paid", "Paid"),
        Rejected => ("rejected", "Rejected"),
    }
}

impl CommissionStatus {
    pub fn can_transition_to(self, next: CommissionStatus) -> bool {
        use CommissionStatus::*;
        matches!(
            (self, next),
            (Pending, Approved) | (Pending, Rejected) | (Approved, Paid)
        )
    }

    /// Counts toward the affiliate's lifetime earnings.
    pub fn is_earned(self) -> bool {
        matches!(self, CommissionStatus::Approved | CommissionStatus::Paid)
    }
}

keyed_enum! {
    pub enum CommissionField: SortField {
        CreatedAt => ("created", "Date"),
        Amount => ("amount", "Amount"),
        Affiliate => ("affiliate", "Affiliate"),
        Customer => ("customer", "Customer"),
        Status => ("status", "Status"),
    }
}

/// One commission earned by an affiliate on a referred customer's purchase.
#[derive(Debug, Clone, Serialize)]
pub struct Commission {
    pub id: i64,
    pub affiliate_id: i64,
    pub affiliate_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub order_ref: String,
    /// Competition / account program the purchase was for.
    pub program: String,
    pub amount_cents: i64,
    pub status: CommissionStatus,
    pub created_at: NaiveDateTime,
}

impl TableRecord for Commission {
    type Status = CommissionStatus;
    type Field = CommissionField;

    const DEFAULT_SORT: CommissionField = CommissionField::CreatedAt;

    fn status(&self) -> CommissionStatus {
        self.status
    }

    fn category(&self) -> Option<&str> {
        Some(&self.program)
    }

    fn searchable(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.to_string()),
            Cow::Borrowed(&self.affiliate_name),
            Cow::Borrowed(&self.customer_name),
            Cow::Borrowed(&self.customer_email),
            Cow::Borrowed(&self.order_ref),
        ]
    }

    fn sort_key(&self, field: CommissionField) -> SortKey<'_> {
        match field {
            CommissionField::CreatedAt => SortKey::Date(Some(self.created_at)),
            CommissionField::Amount => SortKey::cents(self.amount_cents),
            CommissionField::Affiliate => SortKey::text(&self.affiliate_name),
            CommissionField::Customer => SortKey::text(&self.customer_name),
            CommissionField::Status => SortKey::text(self.status.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        use CommissionStatus::*;
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Approved.can_transition_to(Paid));

        assert!(!Pending.can_transition_to(Paid));
        assert!(!Paid.can_transition_to(Pending));
        assert!(!Rejected.can_transition_to(Approved));
        assert!(!Approved.can_transition_to(Approved));
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for status in CommissionStatus::ALL {
            assert_eq!(status.as_str().parse::<CommissionStatus>().unwrap(), *status);
        }
        assert!("settled".parse::<CommissionStatus>().is_err());
    }
}
