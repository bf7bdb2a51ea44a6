// Table state <-> URL query string.
use super::record::{RecordStatus, SortField, TableRecord};
use super::state::{FilterState, SortState, StatusFilter, TableOptions, TableState};
use super::view::TableView;
use std::collections::HashMap;
use url::form_urlencoded;

pub type QueryParams = HashMap<String, String>;

pub fn parse_query_string(raw: &str) -> QueryParams {
    form_urlencoded::parse(raw.as_bytes()).into_owned().collect()
}

impl<S: RecordStatus, F: SortField> TableState<S, F> {
    /// Unknown or malformed values fall back to defaults. The page is left
    /// unclamped; [`TableView::with_state`] clamps it against the data.
    pub fn from_params(params: &QueryParams, default_sort: F, items_per_page: usize) -> Self {
        let mut state = Self::new(default_sort, items_per_page);

        state.filter = FilterState {
            status: params
                .get("status")
                .map(|s| StatusFilter::parse(s))
                .unwrap_or(StatusFilter::All),
            query: params.get("q").cloned().unwrap_or_default(),
            category: params
                .get("category")
                .map(|c| c.trim())
                .filter(|c| !c.is_empty() && *c != "all")
                .map(str::to_string),
        };

        if let Some(field) = params.get("sort").and_then(|s| s.parse::<F>().ok()) {
            state.sort.field = field;
        }
        if let Some(direction) = params.get("dir").and_then(|d| d.parse().ok()) {
            state.sort.direction = direction;
        }

        state.pagination.current_page = params
            .get("page")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1);

        state
    }

    /// Encodes only what differs from the defaults.
    pub fn to_query(&self, default_sort: F) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());

        if let Some(q) = self.filter.active_query() {
            ser.append_pair("q", q);
        }
        if let StatusFilter::Only(status) = self.filter.status {
            ser.append_pair("status", status.as_str());
        }
        if let Some(category) = &self.filter.category {
            ser.append_pair("category", category);
        }
        if self.sort != SortState::new(default_sort) {
            ser.append_pair("sort", self.sort.field.as_str());
            ser.append_pair("dir", self.sort.direction.as_str());
        }
        if self.pagination.current_page > 1 {
            ser.append_pair("page", &self.pagination.current_page.to_string());
        }

        ser.finish()
    }
}

impl<R: TableRecord> TableView<R> {
    pub fn from_params(records: Vec<R>, params: &QueryParams, options: TableOptions) -> Self {
        let state = TableState::from_params(params, R::DEFAULT_SORT, options.items_per_page);
        TableView::with_state(records, state, options)
    }

    pub fn query_string(&self) -> String {
        self.state().to_query(R::DEFAULT_SORT)
    }

    pub fn current_href(&self, base: &str) -> String {
        join(base, &self.query_string())
    }

    /// Where a click on `field`'s header leads.
    pub fn sort_href(&self, base: &str, field: R::Field) -> String {
        let mut next = self.state().clone();
        next.set_sort(field, self.options().reset_page_on_sort);
        join(base, &next.to_query(R::DEFAULT_SORT))
    }

    /// Same sort, no filters, first page.
    pub fn clear_filter_href(&self, base: &str) -> String {
        let mut next = self.state().clone();
        next.set_filter(FilterState::default());
        join(base, &next.to_query(R::DEFAULT_SORT))
    }

    pub fn page_href(&self, base: &str, page: usize) -> String {
        let mut next = self.state().clone();
        next.pagination.current_page = next.pagination.clamp(page, self.filtered_count());
        join(base, &next.to_query(R::DEFAULT_SORT))
    }
}

fn join(base: &str, query: &str) -> String {
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{query}")
    }
}
