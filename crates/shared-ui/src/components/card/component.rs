use dioxus::prelude::*;

/// Bordered panel that groups a screen section.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "lab-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Header row of a Card: a title on the left, optional actions on the right.
#[component]
pub fn CardHeader(
    title: Element,
    #[props(default)] actions: Option<Element>,
) -> Element {
    rsx! {
        div { class: "lab-card-header",
            h3 { class: "lab-card-title", {title} }
            if let Some(actions) = actions {
                div { class: "lab-card-actions", {actions} }
            }
        }
    }
}

/// Body of a Card.
#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "lab-card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
