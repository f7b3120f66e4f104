use crate::state::StateCell;
use async_trait::async_trait;
use dioxus::prelude::*;
use futures::channel::oneshot;
use shared_types::{Notice, NoticeKind};
use shared_ui::{show_toast, use_toast, ConfirmDialog, ToastLevel, Toasts};
use std::sync::atomic::{AtomicU64, Ordering};

/// User-facing notifications and yes/no confirmations.
#[async_trait(?Send)]
pub trait Notifier {
    fn notify(&self, notice: Notice);

    /// Ask the user a question; `false` when declined or dismissed.
    async fn confirm(&self, message: &str) -> bool;
}

fn toast_level(kind: NoticeKind) -> ToastLevel {
    match kind {
        NoticeKind::Success => ToastLevel::Success,
        NoticeKind::Info => ToastLevel::Info,
        NoticeKind::Warning => ToastLevel::Warning,
        NoticeKind::Error => ToastLevel::Error,
    }
}

static NEXT_CONFIRM_ID: AtomicU64 = AtomicU64::new(0);

/// A confirmation waiting for the user's answer.
pub struct PendingConfirm {
    id: u64,
    message: String,
    reply: oneshot::Sender<bool>,
}

/// Clears the slot if it still holds question `id` when the asker goes away.
struct Withdraw<S: StateCell<Option<PendingConfirm>>> {
    slot: S,
    id: u64,
}

impl<S: StateCell<Option<PendingConfirm>>> Drop for Withdraw<S> {
    fn drop(&mut self) {
        let id = self.id;
        self.slot.try_update(|pending| {
            if pending.as_ref().is_some_and(|p| p.id == id) {
                *pending = None;
            }
        });
    }
}

/// Post `message` into `slot` and wait for [`answer`].
///
/// A newer question replaces an unanswered one, whose sender drops and reads
/// as "no". Dropping the returned future withdraws the question.
async fn ask<S: StateCell<Option<PendingConfirm>>>(slot: S, message: &str) -> bool {
    let (reply, answered) = oneshot::channel();
    let id = NEXT_CONFIRM_ID.fetch_add(1, Ordering::Relaxed);
    slot.update(|pending| {
        *pending = Some(PendingConfirm {
            id,
            message: message.to_string(),
            reply,
        })
    });
    let _withdraw = Withdraw { slot, id };
    answered.await.unwrap_or(false)
}

fn answer(slot: &impl StateCell<Option<PendingConfirm>>, accepted: bool) {
    if let Some(confirm) = slot.update(Option::take) {
        let _ = confirm.reply.send(accepted);
    }
}

/// Notifier backed by the toast stack and a single confirmation dialog.
#[derive(Clone, Copy)]
pub struct UiNotifier {
    toasts: Toasts,
    pending: Signal<Option<PendingConfirm>>,
}

#[async_trait(?Send)]
impl Notifier for UiNotifier {
    fn notify(&self, notice: Notice) {
        show_toast(self.toasts, toast_level(notice.kind), notice.text());
    }

    async fn confirm(&self, message: &str) -> bool {
        ask(self.pending, message).await
    }
}

/// Hook to access the notifier provided by [`NotifierHost`].
pub fn use_notifier() -> UiNotifier {
    use_context::<UiNotifier>()
}

/// Provides a [`UiNotifier`] to its children and renders pending confirmations.
///
/// Must sit inside `ToastProvider`.
#[component]
pub fn NotifierHost(children: Element) -> Element {
    let toasts = use_toast();
    let pending = use_signal(|| None::<PendingConfirm>);
    use_context_provider(|| UiNotifier { toasts, pending });

    let message = pending
        .read()
        .as_ref()
        .map(|p| p.message.clone());

    rsx! {
        {children}
        ConfirmDialog {
            open: message.is_some(),
            title: "Xác nhận".to_string(),
            description: rsx! { "{message.clone().unwrap_or_default()}" },
            on_confirm: move |_| answer(&pending, true),
            on_cancel: move |_| answer(&pending, false),
        }
    }
}
