use super::record::TableRecord;
use super::state::{FilterState, SortState, TableOptions, TableState};

/// Filter → sort → paginate over an already-fetched snapshot.
///
/// Only the three state objects are stored; every read recomputes from the
/// source rows, so the visible page can never drift from the state.
pub struct TableView<R: TableRecord> {
    records: Vec<R>,
    state: TableState<R::Status, R::Field>,
    options: TableOptions,
}

impl<R: TableRecord> TableView<R> {
    pub fn new(records: Vec<R>, options: TableOptions) -> Self {
        Self {
            records,
            state: TableState::new(R::DEFAULT_SORT, options.items_per_page),
            options,
        }
    }

    /// Build a view from an existing state, clamping its page to the data.
    pub fn with_state(
        records: Vec<R>,
        state: TableState<R::Status, R::Field>,
        options: TableOptions,
    ) -> Self {
        let requested = state.pagination.current_page;
        let mut view = Self {
            records,
            state,
            options,
        };
        view.state.pagination.items_per_page = options.items_per_page.max(1);
        view.set_page(requested);
        view
    }

    pub fn state(&self) -> &TableState<R::Status, R::Field> {
        &self.state
    }

    pub fn options(&self) -> TableOptions {
        self.options
    }

    pub fn filter(&self) -> &FilterState<R::Status> {
        &self.state.filter
    }

    pub fn sort(&self) -> SortState<R::Field> {
        self.state.sort
    }

    pub fn set_filter(&mut self, filter: FilterState<R::Status>) {
        self.state.set_filter(filter);
    }

    pub fn clear_filter(&mut self) {
        self.state.set_filter(FilterState::default());
    }

    pub fn set_sort(&mut self, field: R::Field) {
        self.state.set_sort(field, self.options.reset_page_on_sort);
    }

    pub fn set_page(&mut self, page: usize) {
        let count = self.filtered_count();
        self.state.pagination.current_page = self.state.pagination.clamp(page, count);
    }

    pub fn current_page(&self) -> usize {
        self.state.pagination.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.state.pagination.items_per_page
    }

    pub fn filtered(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| self.state.filter.matches(*r))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| self.state.filter.matches(*r))
            .count()
    }

    /// Every row passing the filter, in display order.
    pub fn sorted_rows(&self) -> Vec<&R> {
        let mut rows = self.filtered();
        let SortState { field, direction } = self.state.sort;

        rows.sort_by(|a, b| direction.apply(a.sort_key(field).compare(&b.sort_key(field))));
        rows
    }

    pub fn visible_rows(&self) -> Vec<&R> {
        let mut rows = self.sorted_rows();
        let range = self.state.pagination.bounds(rows.len());
        rows.truncate(range.end);
        rows.drain(..range.start);
        rows
    }

    pub fn total_pages(&self) -> usize {
        self.state.pagination.total_pages(self.filtered_count())
    }

    pub fn has_previous(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    /// 1-based `(first, last, total)` for a "Showing X–Y of Z" label.
    /// `first` is 0 when nothing matches.
    pub fn page_bounds(&self) -> (usize, usize, usize) {
        let total = self.filtered_count();
        let range = self.state.pagination.bounds(total);
        if range.is_empty() {
            (0, 0, total)
        } else {
            (range.start + 1, range.end, total)
        }
    }

    /// Distinct categories across the whole snapshot, sorted, for the dropdown.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.records.iter().filter_map(|r| r.category()).collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}
