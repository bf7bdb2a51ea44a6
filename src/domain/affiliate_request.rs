// src/domain/affiliate_request.rs
use crate::table::{RecordStatus, SortKey, TableRecord};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::borrow::Cow;

keyed_enum! {
    pub enum RequestStatus: RecordStatus {
        Pending => ("pending", "Pending review"),
        Approved => ("approved", "Approved"),
        Rejected => ("rejected", "Rejected"),
    }
}

impl RequestStatus {
    /// Applications are reviewed exactly once.
    pub fn can_transition_to(self, next: RequestStatus) -> bool {
        self == RequestStatus::Pending && next != RequestStatus::Pending
    }
}

keyed_enum! {
    pub enum RequestField: SortField {
        SubmittedAt => ("submitted", "Submitted"),
        Name => ("name", "Name"),
        Email => ("email", "Email"),
        Country => ("country", "Country"),
        Status => ("status", "Status"),
    }
}

/// An application to join the affiliate program.
#[derive(Debug, Clone, Serialize)]
pub struct AffiliateRequest {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub website: Option<String>,
    pub country: String,
    pub message: Option<String>,
    pub status: RequestStatus,
    pub submitted_at: NaiveDateTime,
    pub reviewed_at: Option<NaiveDateTime>,
}

/// Form input for a new application.
#[derive(Debug, Clone)]
pub struct NewAffiliateRequest {
    pub full_name: String,
    pub email: String,
    pub website: Option<String>,
    pub country: String,
    pub message: Option<String>,
}

impl TableRecord for AffiliateRequest {
    type Status = RequestStatus;
    type Field = RequestField;

    const DEFAULT_SORT: RequestField = RequestField::SubmittedAt;

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn category(&self) -> Option<&str> {
        Some(&self.country)
    }

    fn searchable(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Owned(self.id.to_string()),
            Cow::Borrowed(self.full_name.as_str()),
            Cow::Borrowed(self.email.as_str()),
        ];
        if let Some(site) = &self.website {
            fields.push(Cow::Borrowed(site.as_str()));
        }
        fields
    }

    fn sort_key(&self, field: RequestField) -> SortKey<'_> {
        match field {
            RequestField::SubmittedAt => SortKey::Date(Some(self.submitted_at)),
            RequestField::Name => SortKey::text(&self.full_name),
            RequestField::Email => SortKey::text(&self.email),
            RequestField::Country => SortKey::text(&self.country),
            RequestField::Status => SortKey::text(self.status.as_str()),
        }
    }
}
