use crate::domain::affiliate_request::{AffiliateRequest, RequestField, RequestStatus};
use crate::table::{RecordStatus, TableView};
use crate::templates::components::format_timestamp;
use crate::templates::components::table::{
    empty_row, export_link, filter_bar, pager, sort_header, transition_buttons,
};
use crate::templates::{desktop_layout, status_badge};
use maud::{html, Markup};

pub const REQUESTS_PATH: &str = "/admin/affiliate-requests";

pub fn request_tone(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "warn",
        RequestStatus::Approved => "good",
        RequestStatus::Rejected => "bad",
    }
}

pub fn affiliate_requests_page(view: &TableView<AffiliateRequest>) -> Markup {
    let base = REQUESTS_PATH;
    let return_to = view.current_href(base);
    let rows = view.visible_rows();

    desktop_layout(
        "Applications",
        true,
        html! {
            main class="container" {
                div style="display: flex; justify-content: space-between; align-items: baseline;" {
                    h1 { "Affiliate applications" }
                    (export_link(view, base))
                }

                section class="card" {
                    (filter_bar(view, base, "countries", "Name, email or website…"))

                    div style="overflow-x: auto;" {
                        table {
                            thead {
                                tr {
                                    th { "ID" }
                                    (sort_header(view, base, RequestField::SubmittedAt))
                                    (sort_header(view, base, RequestField::Name))
                                    (sort_header(view, base, RequestField::Email))
                                    (sort_header(view, base, RequestField::Country))
                                    th { "Website" }
                                    (sort_header(view, base, RequestField::Status))
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                @for r in &rows {
                                    tr {
                                        td { (r.id) }
                                        td style="color: #6b7280;" { (format_timestamp(&r.submitted_at)) }
                                        td {
                                            (r.full_name)
                                            @if let Some(message) = &r.message {
                                                br;
                                                span style="color: #6b7280; font-size: 0.85em;" { (message) }
                                            }
                                        }
                                        td { (r.email) }
                                        td { (r.country) }
                                        td {
                                            @if let Some(site) = &r.website {
                                                a href=(site) rel="noopener" target="_blank" { (site) }
                                            }
                                        }
                                        td { (status_badge(r.status.label(), request_tone(r.status))) }
                                        td {
                                            (transition_buttons(
                                                &format!("{base}/{}/status", r.id),
                                                &return_to,
                                                &next_statuses(r.status),
                                            ))
                                        }
                                    }
                                }
                                @if rows.is_empty() {
                                    (empty_row(8, view.filter().is_active()))
                                }
                            }
                        }
                    }

                    (pager(view, base))
                }
            }
        },
    )
}

fn next_statuses(current: RequestStatus) -> Vec<RequestStatus> {
    RequestStatus::ALL
        .iter()
        .copied()
        .filter(|next| current.can_transition_to(*next))
        .collect()
}
