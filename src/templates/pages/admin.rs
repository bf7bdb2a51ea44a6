use crate::domain::money::format_cents;
use crate::table::{RecordStatus, TableRecord};
use crate::templates::{card, desktop_layout, status_badge};
use maud::{html, Markup};

pub struct StatusCount {
    pub label: &'static str,
    pub tone: &'static str,
    pub count: usize,
    /// Listing pre-filtered to this status.
    pub href: String,
}

pub struct TableSummary {
    pub title: &'static str,
    pub href: &'static str,
    pub total: usize,
    pub counts: Vec<StatusCount>,
}

impl TableSummary {
    pub fn from_records<R: TableRecord>(
        title: &'static str,
        href: &'static str,
        records: &[R],
        tone: fn(R::Status) -> &'static str,
    ) -> Self {
        let counts = <R::Status as RecordStatus>::ALL
            .iter()
            .map(|status| StatusCount {
                label: status.label(),
                tone: tone(*status),
                count: records.iter().filter(|r| r.status() == *status).count(),
                href: format!("{href}?status={}", status.as_str()),
            })
            .collect();

        Self {
            title,
            href,
            total: records.len(),
            counts,
        }
    }
}

pub struct AdminVm {
    pub affiliates: i64,
    pub pending_commissions_cents: i64,
    pub open_payouts_cents: i64,
    pub tables: Vec<TableSummary>,
}

pub fn admin_page(vm: &AdminVm) -> Markup {
    desktop_layout(
        "Overview",
        true,
        html! {
            main class="container" {
                h1 { "Program overview" }

                div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;" {
                    (card("Affiliates", html! { p style="font-size: 1.6em; margin: 0;" { (vm.affiliates) } }))
                    (card("Commissions awaiting review", html! {
                        p style="font-size: 1.6em; margin: 0;" { (format_cents(vm.pending_commissions_cents)) }
                    }))
                    (card("Payouts in flight", html! {
                        p style="font-size: 1.6em; margin: 0;" { (format_cents(vm.open_payouts_cents)) }
                    }))
                }

                @for table in &vm.tables {
                    section class="card" {
                        div style="display: flex; justify-content: space-between; align-items: baseline;" {
                            h3 { a href=(table.href) { (table.title) } }
                            span style="color: #6b7280;" { (table.total) " total" }
                        }
                        div style="display: flex; gap: 12px; flex-wrap: wrap;" {
                            @for c in &table.counts {
                                a href=(c.href) style="text-decoration: none;" {
                                    (status_badge(c.label, c.tone)) " " (c.count)
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
