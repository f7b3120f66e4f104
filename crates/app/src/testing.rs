//! In-memory stand-ins for the backend and the notifier, plus a render helper.

use crate::api::{AdminApi, BorrowApi};
use crate::notify::{Notifier, NotifierHost};
use async_trait::async_trait;
use dioxus::prelude::*;
use shared_types::{
    AppError, BookingPayload, CreateUserRequest, Notice, NoticeKind, Room, SupplyItem, User,
};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

pub fn user(id: i64, username: &str, role: &str, active: bool) -> User {
    User {
        user_id: id,
        username: username.to_string(),
        full_name: Some(format!("{username} full")),
        email: Some(format!("{username}@lab.edu.vn")),
        role: Some(role.to_string()),
        is_active: active,
    }
}

/// Backend fake holding a user table. Every call is logged as a short string.
#[derive(Clone, Default)]
pub struct FakeAdminApi {
    pub users: Rc<RefCell<Vec<User>>>,
    pub calls: Rc<RefCell<Vec<String>>>,
    failures: Rc<RefCell<HashMap<&'static str, AppError>>>,
}

impl FakeAdminApi {
    pub fn with_users(users: Vec<User>) -> Self {
        let api = Self::default();
        *api.users.borrow_mut() = users;
        api
    }

    /// Make every call of `op` fail with `err` from now on.
    pub fn fail(&self, op: &'static str, err: AppError) {
        self.failures.borrow_mut().insert(op, err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, op: &'static str, call: String) -> Result<(), AppError> {
        self.calls.borrow_mut().push(call);
        match self.failures.borrow().get(op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl AdminApi for FakeAdminApi {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.record("list", "list".into())?;
        Ok(self.users.borrow().clone())
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<(), AppError> {
        self.record("create", format!("create {}", request.username))?;
        let mut users = self.users.borrow_mut();
        let id = users.iter().map(|u| u.user_id).max().unwrap_or(0) + 1;
        users.push(User {
            user_id: id,
            username: request.username.clone(),
            full_name: Some(request.full_name.clone()),
            email: Some(request.email.clone()),
            role: Some(request.role.clone()),
            is_active: true,
        });
        Ok(())
    }

    async fn set_user_active(&self, user_id: i64, active: bool) -> Result<(), AppError> {
        self.record("status", format!("status {user_id} {active}"))?;
        for u in self.users.borrow_mut().iter_mut().filter(|u| u.user_id == user_id) {
            u.is_active = active;
        }
        Ok(())
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), AppError> {
        self.record("delete", format!("delete {user_id}"))?;
        self.users.borrow_mut().retain(|u| u.user_id != user_id);
        Ok(())
    }
}

/// Backend fake for rooms, the supply catalogue and borrow requests.
#[derive(Clone, Default)]
pub struct FakeBorrowApi {
    pub rooms: Rc<RefCell<Vec<Room>>>,
    pub supplies: Rc<RefCell<Vec<SupplyItem>>>,
    pub submitted: Rc<RefCell<Vec<BookingPayload>>>,
    failures: Rc<RefCell<HashMap<&'static str, AppError>>>,
}

impl FakeBorrowApi {
    pub fn fail(&self, op: &'static str, err: AppError) {
        self.failures.borrow_mut().insert(op, err);
    }

    fn check(&self, op: &'static str) -> Result<(), AppError> {
        match self.failures.borrow().get(op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl BorrowApi for FakeBorrowApi {
    async fn list_rooms(&self) -> Result<Vec<Room>, AppError> {
        self.check("rooms")?;
        Ok(self.rooms.borrow().clone())
    }

    async fn list_supplies(&self) -> Result<Vec<SupplyItem>, AppError> {
        self.check("items")?;
        Ok(self.supplies.borrow().clone())
    }

    async fn submit_booking(&self, payload: &BookingPayload) -> Result<(), AppError> {
        self.check("submit")?;
        self.submitted.borrow_mut().push(payload.clone());
        Ok(())
    }
}

/// Records notices and answers confirmations from a script.
///
/// An exhausted script answers "no".
#[derive(Clone, Default)]
pub struct FakeNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
    answers: Rc<RefCell<VecDeque<bool>>>,
    questions: Rc<RefCell<Vec<String>>>,
}

impl FakeNotifier {
    pub fn answering(answers: &[bool]) -> Self {
        let notifier = Self::default();
        notifier.answers.borrow_mut().extend(answers.iter().copied());
        notifier
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn messages(&self) -> Vec<(NoticeKind, String)> {
        self.notices
            .borrow()
            .iter()
            .map(|n| (n.kind, n.text()))
            .collect()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Notifier for FakeNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    async fn confirm(&self, message: &str) -> bool {
        self.questions.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}

/// Server-render `screen` under the toast and notifier hosts, nested as `App` nests routes.
pub fn render_hosted(screen: Element) -> String {
    dioxus_ssr::render_element(rsx! {
        shared_ui::ToastProvider {
            NotifierHost { {screen} }
        }
    })
}

/// The opening `<button ...>` tag whose tooltip is `title`.
pub fn button_with_title<'a>(html: &'a str, title: &str) -> &'a str {
    let at = html
        .find(&format!("title=\"{title}\""))
        .unwrap_or_else(|| panic!("no button titled {title:?} in {html}"));
    let start = html[..at].rfind("<button").expect("title sits on a button");
    let end = at + html[at..].find('>').expect("button tag closes");
    &html[start..=end]
}

/// Whether a rendered tag carries a true `disabled` attribute.
pub fn is_disabled(tag: &str) -> bool {
    tag.contains("disabled")
        && !tag.contains("disabled=false")
        && !tag.contains("disabled=\"false\"")
}
