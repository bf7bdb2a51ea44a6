use crate::domain::commission::{Commission, CommissionField, CommissionStatus};
use crate::domain::money::format_cents;
use crate::table::{RecordStatus, TableView};
use crate::templates::components::table::{
    empty_row, export_link, filter_bar, pager, sort_header, transition_buttons,
};
use crate::templates::components::format_timestamp;
use crate::templates::{desktop_layout, status_badge};
use maud::{html, Markup};

pub const COMMISSIONS_PATH: &str = "/admin/commissions";

pub fn commission_tone(status: CommissionStatus) -> &'static str {
    match status {
        CommissionStatus::Pending => "warn",
        CommissionStatus::Approved => "info",
        CommissionStatus::Paid => "good",
        CommissionStatus::Rejected => "bad",
    }
}

pub fn commissions_page(view: &TableView<Commission>) -> Markup {
    let base = COMMISSIONS_PATH;
    let return_to = view.current_href(base);
    let rows = view.visible_rows();

    desktop_layout(
        "Commissions",
        true,
        html! {
            main class="container" {
                div style="display: flex; justify-content: space-between; align-items: baseline;" {
                    h1 { "Commissions" }
                    (export_link(view, base))
                }

                section class="card" {
                    (filter_bar(view, base, "programs", "Affiliate, customer, order…"))

                    div style="overflow-x: auto;" {
                        table {
                            thead {
                                tr {
                                    th { "ID" }
                                    (sort_header(view, base, CommissionField::CreatedAt))
                                    (sort_header(view, base, CommissionField::Affiliate))
                                    (sort_header(view, base, CommissionField::Customer))
                                    th { "Order" }
                                    th { "Program" }
                                    (sort_header(view, base, CommissionField::Amount))
                                    (sort_header(view, base, CommissionField::Status))
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                @for c in &rows {
                                    tr {
                                        td { (c.id) }
                                        td style="color: #6b7280;" { (format_timestamp(&c.created_at)) }
                                        td { a href=(format!("/affiliates/{}", c.affiliate_id)) { (c.affiliate_name) } }
                                        td {
                                            (c.customer_name)
                                            br;
                                            span style="color: #6b7280; font-size: 0.85em;" { (c.customer_email) }
                                        }
                                        td { code { (c.order_ref) } }
                                        td { (c.program) }
                                        td style="text-align: right;" { (format_cents(c.amount_cents)) }
                                        td { (status_badge(c.status.label(), commission_tone(c.status))) }
                                        td {
                                            (transition_buttons(
                                                &format!("{base}/{}/status", c.id),
                                                &return_to,
                                                &next_statuses(c.status),
                                            ))
                                        }
                                    }
                                }
                                @if rows.is_empty() {
                                    (empty_row(9, view.filter().is_active()))
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

fn next_statuses(current: CommissionStatus) -> Vec<CommissionStatus> {
    CommissionStatus::ALL
        .iter()
        .copied()
        .filter(|next| current.can_transition_to(*next))
        .collect()
}
