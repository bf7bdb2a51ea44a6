use crate::domain::ticket::{SupportTicket, TicketField, TicketStatus};
use crate::table::{RecordStatus, TableView};
use crate::templates::components::format_timestamp;
use crate::templates::components::table::{
    empty_row, export_link, filter_bar, pager, sort_header, transition_buttons,
};
use crate::templates::{desktop_layout, status_badge};
use maud::{html, Markup};

pub const TICKETS_PATH: &str = "/admin/tickets";

pub fn ticket_tone(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "warn",
        TicketStatus::InProgress => "info",
        TicketStatus::Resolved => "good",
        TicketStatus::Closed => "neutral",
    }
}

pub fn priority_tone(priority: &str) -> &'static str {
    match priority {
        "urgent" => "bad",
        "high" => "warn",
        "normal" => "info",
        _ => "neutral",
    }
}

pub fn tickets_page(view: &TableView<SupportTicket>) -> Markup {
    let base = TICKETS_PATH;
    let return_to = view.current_href(base);
    let rows = view.visible_rows();

    desktop_layout(
        "Tickets",
        true,
        html! {
            main class="container" {
                div style="display: flex; justify-content: space-between; align-items: baseline;" {
                    h1 { "Support tickets" }
                    (export_link(view, base))
                }

                section class="card" {
                    (filter_bar(view, base, "priorities", "Subject or affiliate…"))

                    div style="overflow-x: auto;" {
                        table {
                            thead {
                                tr {
                                    th { "ID" }
                                    (sort_header(view, base, TicketField::Subject))
                                    th { "Affiliate" }
                                    (sort_header(view, base, TicketField::Priority))
                                    (sort_header(view, base, TicketField::CreatedAt))
                                    (sort_header(view, base, TicketField::UpdatedAt))
                                    (sort_header(view, base, TicketField::Status))
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                @for t in &rows {
                                    tr {
                                        td { (t.id) }
                                        td {
                                            strong { (t.subject) }
                                            br;
                                            span style="color: #6b7280; font-size: 0.85em;" { (t.body) }
                                        }
                                        td { a href=(format!("/affiliates/{}", t.affiliate_id)) { (t.affiliate_name) } }
                                        td { (status_badge(&t.priority, priority_tone(&t.priority))) }
                                        td style="color: #6b7280;" { (format_timestamp(&t.created_at)) }
                                        td style="color: #6b7280;" { (format_timestamp(&t.updated_at)) }
                                        td { (status_badge(t.status.label(), ticket_tone(t.status))) }
                                        td {
                                            (transition_buttons(
                                                &format!("{base}/{}/status", t.id),
                                                &return_to,
                                                &next_statuses(t.status),
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

fn next_statuses(current: TicketStatus) -> Vec<TicketStatus> {
    TicketStatus::ALL
        .iter()
        .copied()
        .filter(|next| current.can_transition_to(*next))
        .collect()
}
