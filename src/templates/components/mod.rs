use chrono::NaiveDateTime;
use maud::{html, Markup};

pub mod error;
pub mod table;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            (body)
        }
    }
}

/// Pill with one of the `badge-*` colour classes.
pub fn status_badge(label: &str, tone: &str) -> Markup {
    html! {
        span class=(format!("badge badge-{tone}")) { (label) }
    }
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
