use dioxus::prelude::*;

/// Native `<select>` styled to match the dashboard, for filter dropdowns.
///
/// Children should be `option { value: "...", "Label" }` elements. Without a
/// visible `label`, pass `aria_label` so the control still has a name.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    #[props(default)] aria_label: String,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value,
                disabled: disabled,
                "aria-label": if aria_label.is_empty() { label.clone() } else { aria_label.clone() },
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
