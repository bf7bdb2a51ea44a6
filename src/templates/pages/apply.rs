use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

#[derive(Debug, Default)]
pub struct ApplyVm {
    pub submitted: bool,
    pub error: Option<String>,
}

pub fn apply_page(vm: &ApplyVm) -> Markup {
    desktop_layout(
        "Become an affiliate",
        false,
        html! {
            main class="container" style="max-width: 640px;" {
                h1 { "Become an affiliate" }

                @if vm.submitted {
                    div class="flash" {
                        "Thanks! Your application is in the queue. We review new partners within a few business days."
                    }
                } @else {
                    @if let Some(err) = &vm.error {
                        div class="flash" style="background: #fee2e2; color: #991b1b;" { (err) }
                    }

                    (card("Your details", html! {
                        form method="post" action="/apply" style="display: grid; gap: 10px;" {
                            input type="text" name="full_name" placeholder="Full name" required;
                            input type="email" name="email" placeholder="Email" required;
                            input type="url" name="website" placeholder="Website or channel (optional)";
                            input type="text" name="country" placeholder="Country code, e.g. DE" maxlength="2" required;
                            textarea name="message" rows="4" placeholder="Tell us about your audience (optional)" {}
                            button type="submit" { "Apply" }
                        }
                    }))
                }
            }
        },
    )
}
