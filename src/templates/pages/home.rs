use crate::domain::tiers::TIER_THRESHOLDS;
use crate::domain::money::format_cents;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        false,
        html! {
            main class="container" {
                h1 { "Partner with us" }
                p {
                    "Refer traders to our evaluation and funded programs and earn a commission on every purchase."
                }
                p { a href="/apply" { "Apply to become an affiliate →" } }

                (card("Commission tiers", html! {
                    table {
                        thead { tr { th { "Tier" } th { "Lifetime earnings" } th { "Referrals" } th { "Rate" } } }
                        tbody {
                            @for t in TIER_THRESHOLDS {
                                tr {
                                    td { (t.tier.label()) }
                                    td { (format_cents(t.min_earnings_cents)) }
                                    td { (t.min_referrals) }
                                    td { (t.commission_rate_pct) "%" }
                                }
                            }
                        }
                    }
                }))
            }
        },
    )
}
