use chrono::NaiveDateTime;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

/// Status enumeration carried by every row type shown in a table.
pub trait RecordStatus: Copy + Eq + FromStr + 'static {
    const ALL: &'static [Self];

    /// Stable key used in URLs, forms and the database.
    fn as_str(&self) -> &'static str;

    fn label(&self) -> &'static str;
}

/// Columns a table can be sorted by.
pub trait SortField: Copy + Eq + FromStr + 'static {
    fn as_str(&self) -> &'static str;

    fn label(&self) -> &'static str;
}

/// Describes how one row type is searched, categorised and compared.
///
/// Implemented once per record type; [`TableView`](super::TableView) does the rest.
pub trait TableRecord {
    type Status: RecordStatus;
    type Field: SortField;

    /// Column the table sorts by (descending) before the user picks one.
    const DEFAULT_SORT: Self::Field;

    fn status(&self) -> Self::Status;

    /// Value matched by the secondary dropdown filter, if the type has one.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Fields the free-text query is matched against.
    fn searchable(&self) -> Vec<Cow<'_, str>>;

    fn sort_key(&self, field: Self::Field) -> SortKey<'_>;
}

/// A typed value extracted from a record for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey<'a> {
    Number(Option<i64>),
    Date(Option<NaiveDateTime>),
    Text(Cow<'a, str>),
}

impl<'a> SortKey<'a> {
    pub fn text(s: &'a str) -> Self {
        SortKey::Text(Cow::Borrowed(s))
    }

    pub fn cents(cents: i64) -> Self {
        SortKey::Number(Some(cents))
    }

    /// Ascending order. Missing numbers and dates sort first; text compares
    /// lowercased. Keys of different kinds compare equal.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}
