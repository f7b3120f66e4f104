use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

/// Severity of a toast, mirrored from the application's notice kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Show `text` as a toast of the given level.
pub fn show_toast(toasts: Toasts, level: ToastLevel, text: String) {
    match level {
        ToastLevel::Success => {
            toasts.success(text, ToastOptions::new());
        }
        ToastLevel::Info => {
            toasts.info(text, ToastOptions::new());
        }
        ToastLevel::Warning => {
            toasts.warning(text, ToastOptions::new());
        }
        ToastLevel::Error => {
            toasts.error(text, ToastOptions::new());
        }
    }
}

/// Hosts the toast stack; wrap the router in it once.
#[component]
pub fn ToastProvider(mut props: prim::ToastProviderProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "lab-toasts", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}
