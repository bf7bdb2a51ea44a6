use crate::domain::affiliate::{Affiliate, AffiliateStats};
use crate::domain::money::format_cents;
use crate::domain::payout::{Payout, PAYOUT_METHODS};
use crate::domain::ticket::{SupportTicket, TICKET_PRIORITIES};
use crate::domain::tiers::TierProgress;
use crate::table::RecordStatus;
use crate::templates::components::format_timestamp;
use crate::templates::pages::payouts::payout_tone;
use crate::templates::pages::tickets::ticket_tone;
use crate::templates::{card, desktop_layout, status_badge};
use maud::{html, Markup};

pub struct AccountVm {
    pub affiliate: Affiliate,
    pub stats: AffiliateStats,
    pub payouts: Vec<Payout>,
    pub tickets: Vec<SupportTicket>,
    pub minimum_payout_cents: i64,
    pub flash: Option<String>,
}

fn progress_bar(label: &str, pct: u8, detail: Markup) -> Markup {
    html! {
        div style="margin-bottom: 12px;" {
            div style="display: flex; justify-content: space-between; font-size: 0.9em;" {
                span { (label) }
                span { (pct) "%" }
            }
            div class="progress" {
                div style=(format!("width: {pct}%;")) {}
            }
            div style="color: #6b7280; font-size: 0.8em; margin-top: 2px;" { (detail) }
        }
    }
}

fn tier_card(progress: &TierProgress) -> Markup {
    card(
        "Tier progress",
        html! {
            p {
                "Current tier: " strong { (progress.current.label()) }
                " · " (progress.current.commission_rate_pct()) "% commission"
            }
            @match progress.next {
                Some(next) => {
                    p style="color: #6b7280;" {
                        "Next: " (next.label()) " at " (next.commission_rate_pct()) "%"
                    }
                    (progress_bar("Overall", progress.overall_pct, html! {}))
                    (progress_bar("Earnings", progress.earnings_pct, html! {
                        (format_cents(progress.earnings_remaining_cents)) " to go"
                    }))
                    (progress_bar("Referrals", progress.referrals_pct, html! {
                        (progress.referrals_remaining) " more referrals"
                    }))
                }
                None => {
                    p { "You are at the highest tier." }
                }
            }
        },
    )
}

pub fn account_page(vm: &AccountVm) -> Markup {
    let stats = &vm.stats;
    let balance = stats.available_balance_cents();
    let action_base = format!("/affiliates/{}", vm.affiliate.id);

    desktop_layout(
        "My account",
        false,
        html! {
            main class="container" {
                h1 { (vm.affiliate.full_name) }
                p style="color: #6b7280;" {
                    (vm.affiliate.email) " · " (vm.affiliate.country)
                    " · joined " (vm.affiliate.joined_at.format("%B %Y").to_string())
                }

                @if let Some(flash) = &vm.flash {
                    div class="flash" { (flash) }
                }

                div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;" {
                    (card("Lifetime earnings", html! { p style="font-size: 1.4em; margin: 0;" { (format_cents(stats.lifetime_earnings_cents)) } }))
                    (card("This month", html! { p style="font-size: 1.4em; margin: 0;" { (format_cents(stats.earned_this_month_cents)) } }))
                    (card("Pending review", html! { p style="font-size: 1.4em; margin: 0;" { (format_cents(stats.pending_commissions_cents)) } }))
                    (card("Available balance", html! { p style="font-size: 1.4em; margin: 0;" { (format_cents(balance)) } }))
                }

                div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px;" {
                    (tier_card(&stats.tier_progress()))

                    (card("Request a payout", html! {
                        @if balance < vm.minimum_payout_cents {
                            p style="color: #6b7280;" {
                                "Payouts open once your balance reaches "
                                (format_cents(vm.minimum_payout_cents)) "."
                            }
                        } @else {
                            form method="post" action=(format!("{action_base}/payouts")) style="display: flex; gap: 8px; flex-wrap: wrap;" {
                                input type="text" name="amount" placeholder="Amount in USD" required;
                                select name="method" {
                                    @for (key, label) in PAYOUT_METHODS {
                                        option value=(key) { (label) }
                                    }
                                }
                                button type="submit" { "Request" }
                            }
                            p style="color: #6b7280; font-size: 0.85em;" {
                                "Minimum " (format_cents(vm.minimum_payout_cents))
                                ", up to " (format_cents(balance)) "."
                            }
                        }
                    }))
                }

                (card("Payout history", html! {
                    table {
                        thead { tr { th { "Requested" } th { "Method" } th { "Amount" } th { "Status" } } }
                        tbody {
                            @for p in &vm.payouts {
                                tr {
                                    td { (format_timestamp(&p.requested_at)) }
                                    td { (p.method_label()) }
                                    td { (format_cents(p.amount_cents)) }
                                    td { (status_badge(p.status.label(), payout_tone(p.status))) }
                                }
                            }
                            @if vm.payouts.is_empty() {
                                tr { td colspan="4" style="color: #6b7280;" { "No payouts yet." } }
                            }
                        }
                    }
                }))

                (card("Support", html! {
                    form method="post" action=(format!("{action_base}/tickets")) style="display: grid; gap: 8px; margin-bottom: 1rem;" {
                        input type="text" name="subject" placeholder="Subject" required;
                        textarea name="body" rows="3" placeholder="How can we help?" required {}
                        select name="priority" {
                            @for priority in TICKET_PRIORITIES {
                                option value=(priority) selected[*priority == "normal"] { (priority) }
                            }
                        }
                        button type="submit" { "Open ticket" }
                    }
                    table {
                        thead { tr { th { "Subject" } th { "Priority" } th { "Updated" } th { "Status" } } }
                        tbody {
                            @for t in &vm.tickets {
                                tr {
                                    td { (t.subject) }
                                    td { (t.priority) }
                                    td { (format_timestamp(&t.updated_at)) }
                                    td { (status_badge(t.status.label(), ticket_tone(t.status))) }
                                }
                            }
                        }
                    }
                }))
            }
        },
    )
}
