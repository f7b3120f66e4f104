use dioxus::prelude::*;

/// Labelled text, date, time or number input.
///
/// `on_input` receives the raw value; numeric parsing is left to the caller.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<String>,
    #[props(default)] on_keydown: Option<EventHandler<KeyboardEvent>>,
    #[props(default)] placeholder: String,
    #[props(default)] label: Option<Element>,
    #[props(default = "text".to_string())] input_type: String,
    /// Step for number inputs.
    #[props(default)]
    step: Option<String>,
    /// Lower bound hint for number inputs.
    #[props(default)]
    min: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "lab-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "lab-input-wrapper",
            if let Some(label) = label {
                label { class: "lab-input-label", {label} }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                step: step,
                min: min,
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if let Some(handler) = &on_keydown {
                        handler.call(evt);
                    }
                },
                ..merged,
            }
        }
    }
}
