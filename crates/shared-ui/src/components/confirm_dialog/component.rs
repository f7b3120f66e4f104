use dioxus::prelude::*;
use dioxus_primitives::alert_dialog::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle,
};

/// Modal yes/no question built on the alert dialog primitive.
///
/// `on_cancel` fires whenever the dialog closes without confirmation
/// (cancel button, escape, overlay click). It may also fire right after
/// `on_confirm`, so both handlers must tolerate running once each.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    /// Body of the question; may contain markup.
    description: Element,
    #[props(default = "Xác nhận".to_string())] confirm_label: String,
    #[props(default = "Hủy".to_string())] cancel_label: String,
    /// Render the confirm action in the destructive style.
    #[props(default = false)]
    destructive: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let action_class = if destructive {
        "lab-dialog-action destructive"
    } else {
        "lab-dialog-action"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        AlertDialogRoot {
            class: "lab-dialog-overlay",
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    on_cancel.call(());
                }
            },
            AlertDialogContent {
                class: "lab-dialog",
                AlertDialogTitle { class: "lab-dialog-title", "{title}" }
                AlertDialogDescription { class: "lab-dialog-description", {description} }
                AlertDialogActions { class: "lab-dialog-actions",
                    AlertDialogCancel { class: "lab-dialog-cancel", "{cancel_label}" }
                    AlertDialogAction {
                        class: action_class,
                        on_click: move |_: MouseEvent| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
