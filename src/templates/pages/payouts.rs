use crate::domain::money::format_cents;
use crate::domain::payout::{Payout, PayoutField, PayoutStatus};
use crate::table::{RecordStatus, TableView};
use crate::templates::components::format_timestamp;
use crate::templates::components::table::{
    empty_row, export_link, filter_bar, pager, sort_header, transition_buttons,
};
use crate::templates::{desktop_layout, status_badge};
use maud::{html, Markup};

pub const PAYOUTS_PATH: &str = "/admin/payouts";

pub fn payout_tone(status: PayoutStatus) -> &'static str {
    match status {
        PayoutStatus::Pending => "warn",
        PayoutStatus::Processing => "info",
        PayoutStatus::Completed => "good",
        PayoutStatus::Rejected => "bad",
    }
}

pub fn payouts_page(view: &TableView<Payout>) -> Markup {
    let base = PAYOUTS_PATH;
    let return_to = view.current_href(base);
    let rows = view.visible_rows();

    desktop_layout(
        "Payouts",
        true,
        html! {
            main class="container" {
                div style="display: flex; justify-content: space-between; align-items: baseline;" {
                    h1 { "Payout requests" }
                    (export_link(view, base))
                }

                section class="card" {
                    (filter_bar(view, base, "methods", "Affiliate name or email…"))

                    div style="overflow-x: auto;" {
                        table {
                            thead {
                                tr {
                                    th { "ID" }
                                    (sort_header(view, base, PayoutField::RequestedAt))
                                    (sort_header(view, base, PayoutField::Affiliate))
                                    (sort_header(view, base, PayoutField::Method))
                                    (sort_header(view, base, PayoutField::Amount))
                                    (sort_header(view, base, PayoutField::Status))
                                    th { "Processed" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                @for p in &rows {
                                    tr {
                                        td { (p.id) }
                                        td style="color: #6b7280;" { (format_timestamp(&p.requested_at)) }
                                        td {
                                            a href=(format!("/affiliates/{}", p.affiliate_id)) { (p.affiliate_name) }
                                            br;
                                            span style="color: #6b7280; font-size: 0.85em;" { (p.affiliate_email) }
                                        }
                                        td { (p.method_label()) }
                                        td style="text-align: right;" { (format_cents(p.amount_cents)) }
                                        td { (status_badge(p.status.label(), payout_tone(p.status))) }
                                        td style="color: #6b7280;" {
                                            @if let Some(at) = &p.processed_at {
                                                (format_timestamp(at))
                                            } @else {
                                                "—"
                                            }
                                        }
                                        td {
                                            (transition_buttons(
                                                &format!("{base}/{}/status", p.id),
                                                &return_to,
                                                &next_statuses(p.status),
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

fn next_statuses(current: PayoutStatus) -> Vec<PayoutStatus> {
    PayoutStatus::ALL
        .iter()
        .copied()
        .filter(|next| current.can_transition_to(*next))
        .collect()
}
