use dioxus::prelude::*;

/// A native select element for forms and filters.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called with the new value when the selection changes.
    #[props(default)]
    on_change: Option<EventHandler<String>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: Option<Element>,
    #[props(default = false)]
    disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "lab-select-wrapper",
            if let Some(label) = label {
                label { class: "lab-select-label", {label} }
            }
            select {
                class: "lab-select",
                value: value,
                disabled: disabled,
                onchange: move |evt: FormEvent| {
                    if let Some(handler) = &on_change {
                        handler.call(evt.value());
                    }
                },
                {children}
            }
        }
    }
}
