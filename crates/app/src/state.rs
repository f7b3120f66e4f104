use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared mutable screen state.
///
/// Controllers mutate state only through short closures so no borrow is ever
/// held across an `.await`. Implemented for Dioxus signals in the UI and for
/// `Rc<RefCell<_>>` in tests.
pub trait StateCell<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Like [`update`](Self::update), but skips `f` when the state is gone.
    fn try_update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(self.update(f))
    }
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = *self;
        let mut guard = signal.write();
        f(&mut guard)
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.peek())
    }

    fn try_update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut signal = *self;
        let mut guard = signal.try_write().ok()?;
        Some(f(&mut guard))
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }
}
