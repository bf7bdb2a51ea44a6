use maud::{html, Markup, PreEscaped, DOCTYPE};

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #111827; background: #f9fafb; }
header { display: flex; align-items: center; justify-content: space-between; padding: 12px 24px; background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,.06); }
header nav ul { display: flex; gap: 16px; list-style: none; margin: 0; padding: 0; }
header a { color: #374151; text-decoration: none; }
main.container { max-width: 1200px; margin: 0 auto; padding: 24px; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px 20px; margin-bottom: 1.5rem; }
table { width: 100%; border-collapse: collapse; }
th { padding: 10px 8px; border-bottom: 2px solid #e5e7eb; text-align: left; font-size: .85em; color: #6b7280; white-space: nowrap; }
th a { color: inherit; text-decoration: none; }
th.sorted a { color: #111827; }
td { padding: 8px; border-bottom: 1px solid #f3f4f6; font-size: .9em; }
.badge { padding: 2px 8px; border-radius: 999px; font-size: .8em; font-weight: 600; white-space: nowrap; }
.badge-neutral { background: #e5e7eb; color: #374151; }
.badge-warn { background: #fef3c7; color: #92400e; }
.badge-info { background: #dbeafe; color: #1e40af; }
.badge-good { background: #d1fae5; color: #065f46; }
.badge-bad { background: #fee2e2; color: #991b1b; }
.filters { display: flex; flex-wrap: wrap; gap: 8px; align-items: center; margin-bottom: 1rem; }
.filters input, .filters select { padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 4px; }
.pager { display: flex; gap: 12px; align-items: center; justify-content: flex-end; margin-top: 1rem; font-size: .9em; }
.pager .disabled { color: #9ca3af; }
.actions form { display: inline; margin: 0; }
.actions button { background: none; border: none; cursor: pointer; color: #2563eb; font-size: .85em; padding: 0 4px; }
.progress { background: #e5e7eb; border-radius: 999px; height: 10px; overflow: hidden; }
.progress > div { background: #6366f1; height: 100%; }
.flash { padding: 10px 14px; border-radius: 6px; background: #ecfdf5; color: #065f46; margin-bottom: 1rem; }
"#;

pub fn desktop_layout(title: &str, is_admin: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Partner Dashboard" }
                style { (PreEscaped(BASE_CSS)) }
            }
            body {
                header {
                    h3 style="margin: 0;" { a href="/" { "Partner Dashboard" } }
                    nav {
                        ul {
                            @if is_admin {
                                li { a href="/admin" { "Overview" } }
                                li { a href="/admin/commissions" { "Commissions" } }
                                li { a href="/admin/payouts" { "Payouts" } }
                                li { a href="/admin/affiliate-requests" { "Applications" } }
                                li { a href="/admin/tickets" { "Tickets" } }
                            } @else {
                                li { a href="/apply" { "Become a partner" } }
                            }
                        }
                    }
                }
                (content)
            }
        }
    }
}
