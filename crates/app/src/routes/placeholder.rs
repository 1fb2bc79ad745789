use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Titled page for sections that have no content yet.
#[component]
pub fn PlaceholderPage(title: String, description: String) -> Element {
    rsx! {
        div { class: "page",
            h2 { class: "page-title", "{title}" }
            Card {
                CardHeader {
                    div {
                        CardTitle { "{title}" }
                        CardDescription { "{description}" }
                    }
                }
                CardContent {
                    p { class: "page-empty", "Nothing to show here yet." }
                }
            }
        }
    }
}
