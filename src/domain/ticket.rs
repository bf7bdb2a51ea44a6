// src/domain/ticket.rs
use crate::table::{RecordStatus, SortKey, TableRecord};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::borrow::Cow;

pub const TICKET_PRIORITIES: &[&str] = &["low", "normal", "high", "urgent"];

keyed_enum! {
    pub enum TicketStatus: RecordStatus {
        Open => ("open", "Open"),
        InProgress => ("in_progress", "In progress"),
        Resolved => ("resolved", "Resolved"),
        Closed => ("closed", "Closed"),
    }
}

impl TicketStatus {
    /// Closed tickets stay closed; anything else may move freely.
    pub fn can_transition_to(self, next: TicketStatus) -> bool {
        self != TicketStatus::Closed && self != next
    }
}

keyed_enum! {
    pub enum TicketField: SortField {
        UpdatedAt => ("updated", "Updated"),
        CreatedAt => ("created", "Opened"),
        Priority => ("priority", "Priority"),
        Subject => ("subject", "Subject"),
        Status => ("status", "Status"),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SupportTicket {
    pub id: i64,
    pub affiliate_id: i64,
    pub affiliate_name: String,
    pub subject: String,
    pub body: String,
    pub priority: String,
    pub status: TicketStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl SupportTicket {
    /// Position in [`TICKET_PRIORITIES`]; unknown priorities rank lowest.
    pub fn priority_rank(&self) -> i64 {
        TICKET_PRIORITIES
            .iter()
            .position(|p| *p == self.priority)
            .map(|i| i as i64)
            .unwrap_or(-1)
    }
}

impl TableRecord for SupportTicket {
    type Status = TicketStatus;
    type Field = TicketField;

    const DEFAULT_SORT: TicketField = TicketField::UpdatedAt;

    fn status(&self) -> TicketStatus {
        self.status
    }

    fn category(&self) -> Option<&str> {
        Some(&self.priority)
    }

    fn searchable(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.to_string()),
            Cow::Borrowed(&self.affiliate_name),
            Cow::Borrowed(&self.subject),
        ]
    }

    fn sort_key(&self, field: TicketField) -> SortKey<'_> {
        match field {
            TicketField::UpdatedAt => SortKey::Date(Some(self.updated_at)),
            TicketField::CreatedAt => SortKey::Date(Some(self.created_at)),
            // urgent > high > normal > low
            TicketField::Priority => SortKey::Number(Some(self.priority_rank())),
            TicketField::Subject => SortKey::text(&self.subject),
            TicketField::Status => SortKey::text(self.status.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_is_final() {
        use TicketStatus::*;
        assert!(Open.can_transition_to(InProgress));
        assert!(Resolved.can_transition_to(Open));
        assert!(InProgress.can_transition_to(Closed));
        assert!(!Closed.can_transition_to(Open));
        assert!(!Open.can_transition_to(Open));
    }

    #[test]
    fn in_progress_key() {
        assert_eq!(
            "in_progress".parse::<TicketStatus>().unwrap(),
            TicketStatus::InProgress
        );
        assert_eq!(TicketStatus::InProgress.to_string(), "in_progress");
    }

    fn ticket(priority: &str) -> SupportTicket {
        let at = chrono::DateTime::from_timestamp(1_700_000_000, 0)
            .unwrap()
            .naive_utc();
        SupportTicket {
            id: 1,
            affiliate_id: 1,
            affiliate_name: "Ana".into(),
            subject: "Hi".into(),
            body: "Hello".into(),
            priority: priority.into(),
            status: TicketStatus::Open,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn priority_sorts_by_urgency_not_alphabet() {
        use std::cmp::Ordering;

        let rank = |priority: &str| ticket(priority).sort_key(TicketField::Priority).compare(
            &ticket("normal").sort_key(TicketField::Priority),
        );
        assert_eq!(rank("low"), Ordering::Less);
        assert_eq!(rank("high"), Ordering::Greater);
        assert_eq!(rank("urgent"), Ordering::Greater);
    }
}
