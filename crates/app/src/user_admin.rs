//! State and operations behind the admin user-management screen.

use crate::api::AdminApi;
use crate::notify::Notifier;
use crate::state::StateCell;
use shared_types::{
    filter_users, validate_new_user, CreateUserRequest, Notice, RoleFilter, User,
};

pub const LOAD_FAILED: &str = "Không thể tải danh sách người dùng!";
pub const CREATED: &str = "Tạo tài khoản thành công!";
pub const CREATE_FAILED: &str = "Lỗi khi tạo tài khoản!";
pub const STATUS_UPDATED: &str = "Thao tác thành công!";
pub const STATUS_FAILED: &str = "Lỗi khi cập nhật trạng thái!";
pub const DELETED: &str = "Đã xóa tài khoản thành công!";
pub const DELETE_FAILED: &str = "Lỗi khi xóa tài khoản!";
pub const DELETE_REFUSED: &str = "Không thể xóa người dùng này do đã có lịch sử mượn/trả. Vui lòng chọn 'Vô hiệu hóa' thay vì Xóa.";
pub const ADMIN_NOT_DELETABLE: &str = "Không thể xóa Admin";

#[derive(Debug, Clone, PartialEq)]
pub struct UserAdminState {
    pub users: Vec<User>,
    pub loading: bool,
    pub show_add_form: bool,
    /// User awaiting delete confirmation.
    pub delete_target: Option<User>,
    pub keyword: String,
    pub role_filter: RoleFilter,
    pub draft: CreateUserRequest,
}

impl Default for UserAdminState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
            show_add_form: false,
            delete_target: None,
            keyword: String::new(),
            role_filter: RoleFilter::All,
            draft: CreateUserRequest::default(),
        }
    }
}

impl UserAdminState {
    /// Rows currently shown in the table.
    pub fn visible_users(&self) -> Vec<User> {
        filter_users(&self.users, &self.keyword, self.role_filter)
    }
}

/// Drives the user-management screen against an [`AdminApi`].
///
/// Mutations report their outcome through the notifier and reload the list on
/// success. The boolean results only say whether the backend accepted the change.
#[derive(Clone)]
pub struct UserAdmin<A, N, S> {
    api: A,
    notifier: N,
    state: S,
}

impl<A, N, S> UserAdmin<A, N, S>
where
    A: AdminApi,
    N: Notifier,
    S: StateCell<UserAdminState>,
{
    pub fn new(api: A, notifier: N, state: S) -> Self {
        Self {
            api,
            notifier,
            state,
        }
    }

    pub async fn load_users(&self) {
        self.state.update(|s| s.loading = true);
        let result = self.api.list_users().await;
        self.state.update(|s| s.loading = false);

        match result {
            Ok(users) => {
                tracing::debug!(count = users.len(), "loaded users");
                self.state.update(|s| s.users = users);
            }
            Err(err) => {
                tracing::error!(%err, "failed to load users");
                self.notifier.notify(Notice::error(LOAD_FAILED));
            }
        }
    }

    /// Validate and submit the draft held in state.
    pub async fn create_user(&self) -> bool {
        let draft = self.state.inspect(|s| s.draft.clone());
        if let Err(err) = validate_new_user(&draft) {
            tracing::warn!(%err, username = %draft.username, "rejected new user");
            self.notifier.notify(err.into());
            return false;
        }

        match self.api.create_user(&draft).await {
            Ok(()) => {
                self.notifier.notify(Notice::success(CREATED));
                self.state.update(|s| {
                    s.show_add_form = false;
                    s.draft = CreateUserRequest::default();
                });
                self.load_users().await;
                true
            }
            Err(err) => {
                tracing::error!(%err, "failed to create user");
                self.notifier.notify(Notice::error(err.message_or(CREATE_FAILED)));
                false
            }
        }
    }

    /// Flip the activation status of `user` after confirmation.
    pub async fn toggle_active(&self, user: &User) -> bool {
        if !self.notifier.confirm(&user.toggle_confirm_message()).await {
            return false;
        }

        match self.api.set_user_active(user.user_id, !user.is_active).await {
            Ok(()) => {
                self.notifier.notify(Notice::success(STATUS_UPDATED));
                self.load_users().await;
                true
            }
            Err(err) => {
                tracing::error!(%err, user_id = user.user_id, "failed to update status");
                self.notifier.notify(Notice::error(err.message_or(STATUS_FAILED)));
                false
            }
        }
    }

    /// Open the delete confirmation for `user`. Administrators are refused.
    pub fn request_delete(&self, user: User) -> bool {
        if !user.can_delete() {
            self.refuse_admin(&user);
            return false;
        }
        self.state.update(|s| s.delete_target = Some(user));
        true
    }

    pub fn cancel_delete(&self) {
        self.state.update(|s| s.delete_target = None);
    }

    /// Close the confirmation and hand back the user it was opened for.
    ///
    /// Call from the confirm handler itself; the dialog's close event can
    /// fire right after it.
    pub fn take_delete_target(&self) -> Option<User> {
        self.state.update(|s| s.delete_target.take())
    }

    pub async fn delete_user(&self, user: User) -> bool {
        if !user.can_delete() {
            self.refuse_admin(&user);
            return false;
        }

        match self.api.delete_user(user.user_id).await {
            Ok(()) => {
                self.notifier.notify(Notice::success(DELETED));
                self.load_users().await;
                true
            }
            Err(err) => {
                tracing::error!(%err, user_id = user.user_id, "failed to delete user");
                let message = match err.server_message() {
                    Some(msg) => msg.to_string(),
                    None if err.has_response() => DELETE_REFUSED.to_string(),
                    None => DELETE_FAILED.to_string(),
                };
                self.notifier.notify(Notice::error(message));
                false
            }
        }
    }

    fn refuse_admin(&self, user: &User) {
        tracing::warn!(user_id = user.user_id, "refused to delete an administrator");
        self.notifier.notify(Notice::warning(ADMIN_NOT_DELETABLE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{user, FakeAdminApi, FakeNotifier};
    use pretty_assertions::assert_eq;
    use shared_types::{AppError, NoticeKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Screen = UserAdmin<FakeAdminApi, FakeNotifier, Rc<RefCell<UserAdminState>>>;

    fn screen(
        api: &FakeAdminApi,
        notifier: &FakeNotifier,
    ) -> (Screen, Rc<RefCell<UserAdminState>>) {
        let state = Rc::new(RefCell::new(UserAdminState::default()));
        (UserAdmin::new(api.clone(), notifier.clone(), state.clone()), state)
    }

    fn seeded() -> FakeAdminApi {
        FakeAdminApi::with_users(vec![
            user(1, "admin", "ADMIN", true),
            user(2, "lan", "TEACHER", true),
            user(3, "minh", "ROLE_TEACHER", false),
        ])
    }

    fn valid_draft() -> CreateUserRequest {
        CreateUserRequest {
            username: "hoa".into(),
            password: "secret1".into(),
            full_name: "Nguyễn Thị Hoa".into(),
            email: "hoa@lab.edu.vn".into(),
            role: "TEACHER".into(),
        }
    }

    #[test]
    fn starts_loading_with_teacher_draft() {
        let state = UserAdminState::default();
        assert!(state.loading);
        assert_eq!(state.draft.role, "TEACHER");
        assert_eq!(state.role_filter, RoleFilter::All);
    }

    #[test]
    fn visible_users_apply_keyword_and_role() {
        let mut state = UserAdminState {
            users: seeded().users.borrow().clone(),
            ..Default::default()
        };
        state.role_filter = RoleFilter::Teacher;
        let names: Vec<_> = state.visible_users().into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["lan", "minh"]);

        state.keyword = "  MIN ".into();
        let names: Vec<_> = state.visible_users().into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["minh"]);
    }

    #[tokio::test]
    async fn load_populates_users_and_clears_loading() {
        let api = seeded();
        let notifier = FakeNotifier::default();
        let (screen, state) = screen(&api, &notifier);

        screen.load_users().await;

        assert!(!state.borrow().loading);
        assert_eq!(state.borrow().users.len(), 3);
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn load_failure_keeps_previous_list() {
        let api = seeded();
        let notifier = FakeNotifier::default();
        let (screen, state) = screen(&api, &notifier);
        screen.load_users().await;

        api.fail("list", AppError::network("offline"));
        screen.load_users().await;

        assert!(!state.borrow().loading);
        assert_eq!(state.borrow().users.len(), 3);
        assert_eq!(
            notifier.messages(),
            vec![(NoticeKind::Error, LOAD_FAILED.to_string())]
        );
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_backend() {
        let api = seeded();
        let notifier = FakeNotifier::default();
        let (screen, state) = screen(&api, &notifier);
        state.borrow_mut().draft = CreateUserRequest {
            username: "ab".into(),
            ..valid_draft()
        };

        assert!(!screen.create_user().await);

        assert!(api.calls().is_empty());
        assert_eq!(
            notifier.messages(),
            vec![(
                NoticeKind::Warning,
                "Username phải có ít nhất 3 ký tự!".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn username_with_space_is_rejected() {
        let api = seeded();
        let notifier = FakeNotifier::default();
        let (screen, state) = screen(&api, &notifier);
        state.borrow_mut().draft = CreateUserRequest {
            username: "ab c".into(),
            ..valid_draft()
        };

        assert!(!screen.create_user().await);
        assert!(api.calls().is_empty());
        assert_eq!(
            notifier.notices()[0].message,
            "Username không được chứa khoảng trắng!"
        );
    }

    #[tokio::test]
    async fn create_success_resets_form_and_reloads() {
        let api = seeded();
        let notifier = FakeNotifier::default();
        let (screen, state) = screen(&api, &notifier);
        {
            let mut s = state.borrow_mut();
            s.show_add_form = true;
            s.draft = CreateUserRequest {
                role: "ADMIN".into(),
                ..valid_draft()
            };
        }

        assert!(screen.create_user().await);

        assert_eq!(api.calls(), vec!["create hoa", "list"]);
        let s = state.borrow();
        assert!(!s.show_add_form);
        assert_eq!(s.draft, CreateUserRequest::default());
        assert_eq!(s.users.len(), 4);
        assert_eq!(
            notifier.messages(),
            vec![(NoticeKind::Success, CREATED.to_string())]
        );
    }

    #[tokio::test]
    async fn create_failure_shows_server_message_or_fallback() {
        let api = seeded();
        let notifier = FakeNotifier::default();
        let (screen, state) = screen(&api, &notifier);
        state.borrow_mut().draft = valid_draft();
        state.borrow_mut().show_add_form = true;

        api.fail(
            "create",
            AppError::from_response(409, r#"{"message":"Username đã tồn tại"}"#),
        );
        assert!(!screen.create_user().await);

        api.fail("create", AppError::from_response(500, ""));
        assert!(!screen.create_user().await);

        assert_eq!(
            notifier.messages(),
            vec![
                (NoticeKind::Error, "Username đã tồn tại".to_string()),
                (NoticeKind::Error, CREATE_FAILED.to_string()),
            ]
        );
        assert!(state.borrow().show_add_form);
        assert_eq!(state.borrow().draft.username, "hoa");
    }

    #[tokio::test]
    async fn declined_toggle_is_silent() {
        let api = seeded();
        let notifier = FakeNotifier::answering(&[false]);
        let (screen, _) = screen(&api, &notifier);
        let lan = user(2, "lan", "TEACHER", true);

        assert!(!screen.toggle_active(&lan).await);

        assert!(api.calls().is_empty());
        assert!(notifier.notices().is_empty());
        assert_eq!(
            notifier.questions(),
            vec!["Bạn có chắc muốn vô hiệu hóa tài khoản \"lan\"?"]
        );
    }

    #[tokio::test]
    async fn confirmed_toggle_sends_negated_status() {
        let api = seeded();
        let notifier = FakeNotifier::answering(&[true]);
        let (screen, state) = screen(&api, &notifier);
        let minh = user(3, "minh", "TEACHER", false);

        assert!(screen.toggle_active(&minh).await);

        assert_eq!(api.calls(), vec!["status 3 true", "list"]);
        assert_eq!(
            notifier.questions(),
            vec!["Bạn có chắc muốn kích hoạt tài khoản \"minh\"?"]
        );
        assert!(state.borrow().users.iter().all(|u| u.is_active));
        assert_eq!(
            notifier.messages(),
            vec![(NoticeKind::Success, STATUS_UPDATED.to_string())]
        );
    }

    #[tokio::test]
    async fn toggle_failure_notifies() {
        let api = seeded();
        let notifier = FakeNotifier::answering(&[true]);
        let (screen, _) = screen(&api, &notifier);
        api.fail("status", AppError::network("offline"));

        assert!(!screen.toggle_active(&user(2, "lan", "TEACHER", true)).await);
        assert_eq!(
            notifier.messages(),
            vec![(NoticeKind::Error, STATUS_FAILED.to_string())]
        );
    }

    #[tokio::test]
    async fn admin_is_never_deleted() {
        let api = seeded();
        let notifier = FakeNotifier::answering(&[true]);
        let (screen, state) = screen(&api, &notifier);
        let admin = user(1, "root", "Role_Admin", true);

        assert!(!screen.request_delete(admin.clone()));
        assert!(state.borrow().delete_target.is_none());
        assert!(!screen.delete_user(admin).await);

        assert!(api.calls().is_empty());
        assert_eq!(
            notifier.messages(),
            vec![
                (NoticeKind::Warning, ADMIN_NOT_DELETABLE.to_string()),
                (NoticeKind::Warning, ADMIN_NOT_DELETABLE.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn confirmed_delete_clears_target_and_reloads() {
        let api = seeded();
        let notifier = FakeNotifier::default();
        let (screen, state) = screen(&api, &notifier);

        assert!(screen.request_delete(user(2, "lan", "TEACHER", true)));
        assert_eq!(state.borrow().delete_target.as_ref().map(|u| u.user_id), Some(2));

        let target = screen.take_delete_target().unwrap();
        screen.cancel_delete();
        assert!(screen.delete_user(target).await);

        assert!(state.borrow().delete_target.is_none());
        assert_eq!(api.calls(), vec!["delete 2", "list"]);
        assert_eq!(state.borrow().users.len(), 2);
        assert_eq!(
            notifier.messages(),
            vec![(NoticeKind::Success, DELETED.to_string())]
        );
    }

    #[tokio::test]
    async fn cancelled_delete_makes_no_call() {
        let api = seeded();
        let notifier = FakeNotifier::default();
        let (screen, state) = screen(&api, &notifier);

        screen.request_delete(user(2, "lan", "TEACHER", true));
        screen.cancel_delete();

        assert!(state.borrow().delete_target.is_none());
        assert!(screen.take_delete_target().is_none());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn delete_failure_messages() {
        let api = seeded();
        let notifier = FakeNotifier::default();
        let (screen, state) = screen(&api, &notifier);
        let lan = user(2, "lan", "TEACHER", true);

        api.fail(
            "delete",
            AppError::from_response(400, r#"{"message":"Người dùng đang mượn vật tư"}"#),
        );
        screen.request_delete(lan.clone());
        let target = screen.take_delete_target().unwrap();
        assert!(!screen.delete_user(target).await);
        assert!(state.borrow().delete_target.is_none());

        api.fail("delete", AppError::from_response(500, "constraint violation"));
        assert!(!screen.delete_user(lan.clone()).await);

        api.fail("delete", AppError::network("connection reset"));
        assert!(!screen.delete_user(lan).await);

        assert_eq!(
            notifier.messages(),
            vec![
                (NoticeKind::Error, "Người dùng đang mượn vật tư".to_string()),
                (NoticeKind::Error, DELETE_REFUSED.to_string()),
                (NoticeKind::Error, DELETE_FAILED.to_string()),
            ]
        );
    }
}
