use dioxus::prelude::*;

/// Row of search inputs, filter selects and action buttons above a list.
///
/// The first child grows to fill the free space.
#[component]
pub fn FilterBar(
    #[props(default)] aria_label: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "lab-filter-bar",
            role: "search",
            aria_label: aria_label,
            {children}
        }
    }
}
