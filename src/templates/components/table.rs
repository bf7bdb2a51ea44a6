// Shared chrome for every listing driven by a `TableView`.
use crate::table::{RecordStatus, SortField, SortState, StatusFilter, TableRecord, TableView};
use maud::{html, Markup};

/// Search box, status and category dropdowns. Submitting drops `page`, so a
/// new filter always lands on page 1.
pub fn filter_bar<R: TableRecord>(
    view: &TableView<R>,
    base: &str,
    category_label: &str,
    placeholder: &str,
) -> Markup {
    let filter = view.filter();
    let statuses = <R::Status as RecordStatus>::ALL;
    let categories = view.categories();
    let sort = view.sort();
    let keep_sort = sort != SortState::new(R::DEFAULT_SORT);

    html! {
        form class="filters" method="get" action=(base) {
            input type="search" name="q" value=(filter.query) placeholder=(placeholder);

            select name="status" {
                option value="all" selected[filter.status == StatusFilter::All] { "All statuses" }
                @for status in statuses {
                    option
                        value=(status.as_str())
                        selected[filter.status == StatusFilter::Only(*status)]
                    { (status.label()) }
                }
            }

            @if !categories.is_empty() {
                select name="category" {
                    option value="all" selected[filter.category.is_none()] { "All " (category_label) }
                    @for category in &categories {
                        option value=(category) selected[filter.category.as_deref() == Some(*category)] {
                            (category)
                        }
                    }
                }
            }

            @if keep_sort {
                input type="hidden" name="sort" value=(sort.field.as_str());
                input type="hidden" name="dir" value=(sort.direction.as_str());
            }

            button type="submit" { "Apply" }

            @if filter.is_active() {
                a href=(view.clear_filter_href(base)) { "Clear" }
            }

            span style="margin-left: auto; color: #6b7280; font-size: 0.9em;" {
                (view.filtered_count()) " matching"
            }
        }
    }
}

pub fn sort_header<R: TableRecord>(view: &TableView<R>, base: &str, field: R::Field) -> Markup {
    let sort = view.sort();
    let active = sort.field == field;

    html! {
        th class=[active.then_some("sorted")] {
            a href=(view.sort_href(base, field)) {
                (field.label())
                @if active {
                    " " (sort.direction.arrow())
                }
            }
        }
    }
}

/// "Showing X–Y of Z" with prev/next links disabled at either end.
pub fn pager<R: TableRecord>(view: &TableView<R>, base: &str) -> Markup {
    let (first, last, total) = view.page_bounds();
    let page = view.current_page();

    html! {
        nav class="pager" {
            span { "Showing " (first) "–" (last) " of " (total) }

            @if view.has_previous() {
                a href=(view.page_href(base, page - 1)) rel="prev" { "← Prev" }
            } @else {
                span class="disabled" { "← Prev" }
            }

            span { "Page " (page) " of " (view.total_pages()) }

            @if view.has_next() {
                a href=(view.page_href(base, page + 1)) rel="next" { "Next →" }
            } @else {
                span class="disabled" { "Next →" }
            }
        }
    }
}

pub fn empty_row(colspan: usize, filtered: bool) -> Markup {
    html! {
        tr {
            td colspan=(colspan) style="text-align: center; color: #6b7280; padding: 24px;" {
                @if filtered {
                    "No rows match the current filters."
                } @else {
                    "Nothing here yet."
                }
            }
        }
    }
}

/// One POST button per allowed next status.
pub fn transition_buttons<S: RecordStatus>(action: &str, return_to: &str, next: &[S]) -> Markup {
    html! {
        div class="actions" {
            @for status in next {
                form method="post" action=(action) {
                    input type="hidden" name="status" value=(status.as_str());
                    input type="hidden" name="return_to" value=(return_to);
                    button type="submit" { "Mark " (status.label().to_lowercase()) }
                }
            }
        }
    }
}

pub fn export_link<R: TableRecord>(view: &TableView<R>, base: &str) -> Markup {
    let query = view.query_string();
    let href = if query.is_empty() {
        format!("{base}/export.xlsx")
    } else {
        format!("{base}/export.xlsx?{query}")
    };

    html! {
        a href=(href) style="font-size: 0.9em;" { "Export to Excel" }
    }
}
