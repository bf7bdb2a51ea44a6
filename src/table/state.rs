use super::record::{RecordStatus, SortField, TableRecord};
use std::cmp::Ordering;
use std::str::FromStr;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: RecordStatus> StatusFilter<S> {
    pub fn accepts(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// "all", empty and unknown values all mean no status filter.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "all" => StatusFilter::All,
            other => other
                .parse::<S>()
                .map(StatusFilter::Only)
                .unwrap_or(StatusFilter::All),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<S> {
    pub status: StatusFilter<S>,
    pub query: String,
    pub category: Option<String>,
}

impl<S> Default for FilterState<S> {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            query: String::new(),
            category: None,
        }
    }
}

impl<S: RecordStatus> FilterState<S> {
    pub fn with_status(mut self, status: S) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The trimmed query, or `None` when there is nothing to match.
    pub fn active_query(&self) -> Option<&str> {
        let q = self.query.trim();
        (!q.is_empty()).then_some(q)
    }

    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All || self.category.is_some() || self.active_query().is_some()
    }

    /// All active predicates ANDed.
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: TableRecord<Status = S>,
    {
        if !self.status.accepts(record.status()) {
            return false;
        }

        if let Some(wanted) = &self.category {
            if record.category() != Some(wanted.as_str()) {
                return false;
            }
        }

        match self.active_query() {
            None => true,
            Some(q) => {
                let needle = q.to_lowercase();
                record
                    .searchable()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: SortField> SortState<F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Header-click transition: same column flips, new column starts descending.
    pub fn toggled(self, field: F) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.toggled(),
            }
        } else {
            Self::new(field)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl PaginationState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    /// Never 0, so an empty table still has a page to stand on.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.items_per_page).max(1)
    }

    pub fn clamp(&self, page: usize, count: usize) -> usize {
        page.clamp(1, self.total_pages(count))
    }

    /// Index range of the current page within `count` rows.
    pub fn bounds(&self, count: usize) -> std::ops::Range<usize> {
        let start = (self.current_page.saturating_sub(1) * self.items_per_page).min(count);
        let end = (start + self.items_per_page).min(count);
        start..end
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub items_per_page: usize,
    pub reset_page_on_sort: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            reset_page_on_sort: false,
        }
    }
}

/// The three pieces of UI state a table view is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState<S, F> {
    pub filter: FilterState<S>,
    pub sort: SortState<F>,
    pub pagination: PaginationState,
}

impl<S: RecordStatus, F: SortField> TableState<S, F> {
    pub fn new(default_sort: F, items_per_page: usize) -> Self {
        Self {
            filter: FilterState::default(),
            sort: SortState::new(default_sort),
            pagination: PaginationState::new(items_per_page),
        }
    }

    pub fn set_filter(&mut self, filter: FilterState<S>) {
        self.filter = filter;
        self.pagination.current_page = 1;
    }

    pub fn set_sort(&mut self, field: F, reset_page: bool) {
        self.sort = self.sort.toggled(field);
        if reset_page {
            self.pagination.current_page = 1;
        }
    }
}
