use crate::api::RestClient;
use crate::notify::{use_notifier, UiNotifier};
use crate::user_admin::{UserAdmin, UserAdminState, ADMIN_NOT_DELETABLE};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdSearch, LdUserPlus, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{Role, RoleFilter, User, ADMIN_LABEL, ROLE_FILTERS, TEACHER_LABEL};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonType, ButtonVariant, Card, CardContent, CardHeader,
    ConfirmDialog, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty,
    DataTableHeader, DataTableRow, FilterBar, FormSelect, Input,
};

type AdminScreen = UserAdmin<RestClient, UiNotifier, Signal<UserAdminState>>;

/// Admin screen for listing, creating, (de)activating and deleting accounts.
#[component]
pub fn AdminUsers() -> Element {
    let client = use_context::<RestClient>();
    let notifier = use_notifier();
    let mut state = use_signal(UserAdminState::default);
    let admin: AdminScreen =
        use_context_provider(|| UserAdmin::new(client, notifier, state));

    let loader = admin.clone();
    use_hook(move || {
        spawn(async move { loader.load_users().await });
    });

    let s = state.read();
    if s.loading && s.users.is_empty() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./admin_users.css") }
            div { class: "admin-loading", "Đang tải dữ liệu..." }
        };
    }

    let visible = s.visible_users();
    let show_add_form = s.show_add_form;
    let keyword = s.keyword.clone();
    let role_value = s.role_filter.as_value();
    let delete_open = s.delete_target.is_some();
    let delete_name = s
        .delete_target
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();
    drop(s);

    let confirm_ctl = admin.clone();
    let cancel_ctl = admin.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin_users.css") }

        div { class: "admin-users-page",
            Card {
                CardHeader {
                    title: rsx! {
                        Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 }
                        " Quản lý người dùng"
                    },
                    actions: rsx! {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| {
                                let mut s = state.write();
                                s.show_add_form = !s.show_add_form;
                            },
                            Icon::<LdUserPlus> { icon: LdUserPlus, width: 16, height: 16 }
                            " Thêm người dùng"
                        }
                    },
                }
                CardContent {
                    FilterBar { aria_label: "Lọc người dùng",
                        Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                        Input {
                            placeholder: "Tìm kiếm người dùng...",
                            value: keyword,
                            on_input: move |value: String| state.write().keyword = value,
                        }
                        FormSelect {
                            value: role_value,
                            on_change: move |value: String| {
                                state.write().role_filter = RoleFilter::from_value(&value);
                            },
                            for filter in ROLE_FILTERS.iter() {
                                option { value: filter.as_value(), "{filter.label()}" }
                            }
                        }
                    }

                    if show_add_form {
                        NewUserForm { state }
                    }

                    UserTable { users: visible }
                }
            }

            ConfirmDialog {
                open: delete_open,
                title: "Xác nhận xóa".to_string(),
                destructive: true,
                confirm_label: "Xóa".to_string(),
                description: rsx! {
                    p {
                        "Xóa tài khoản "
                        strong { "{delete_name}" }
                        "?"
                    }
                    p { class: "admin-delete-note",
                        "Lưu ý: Nếu xóa thất bại, vui lòng chọn \"Vô hiệu hóa\" để bảo toàn dữ liệu lịch sử."
                    }
                },
                on_confirm: move |_| {
                    if let Some(user) = confirm_ctl.take_delete_target() {
                        let ctl = confirm_ctl.clone();
                        spawn(async move {
                            ctl.delete_user(user).await;
                        });
                    }
                },
                on_cancel: move |_| cancel_ctl.cancel_delete(),
            }
        }
    }
}

#[component]
fn NewUserForm(state: Signal<UserAdminState>) -> Element {
    let admin = use_context::<AdminScreen>();
    let mut state = state;
    let draft = state.read().draft.clone();

    rsx! {
        div { class: "admin-add-form",
            h3 { "Tạo tài khoản mới" }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let ctl = admin.clone();
                    spawn(async move {
                        ctl.create_user().await;
                    });
                },
                div { class: "admin-form-grid",
                    Input {
                        placeholder: "Username (tối thiểu 3 ký tự)",
                        value: draft.username,
                        on_input: move |v: String| state.write().draft.username = v,
                    }
                    Input {
                        input_type: "password",
                        placeholder: "Mật khẩu (tối thiểu 6 ký tự)",
                        value: draft.password,
                        on_input: move |v: String| state.write().draft.password = v,
                    }
                    Input {
                        placeholder: "Họ và tên",
                        value: draft.full_name,
                        on_input: move |v: String| state.write().draft.full_name = v,
                    }
                    Input {
                        input_type: "email",
                        placeholder: "Email (ví dụ: abc@domain.com)",
                        value: draft.email,
                        on_input: move |v: String| state.write().draft.email = v,
                    }
                    FormSelect {
                        value: draft.role,
                        on_change: move |v: String| state.write().draft.role = v,
                        option { value: Role::Teacher.as_str(), "{TEACHER_LABEL}" }
                        option { value: Role::Admin.as_str(), "{ADMIN_LABEL}" }
                    }
                }
                div { class: "admin-form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: ButtonType::Submit,
                        "Tạo mới"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| state.write().show_add_form = false,
                        "Hủy"
                    }
                }
            }
        }
    }
}

#[component]
fn UserTable(users: Vec<User>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Username" }
                DataTableColumn { "Họ tên" }
                DataTableColumn { "Vai trò" }
                DataTableColumn { "Trạng thái" }
                DataTableColumn { "Hành động" }
            }
            DataTableBody {
                if users.is_empty() {
                    DataTableEmpty { columns: 5, "Không có người dùng nào" }
                }
                for user in users {
                    UserRow { key: "{user.user_id}", user }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User) -> Element {
    let admin = use_context::<AdminScreen>();
    let role = user.role();
    let deletable = user.can_delete();
    let delete_hint = if deletable { "Xóa tài khoản" } else { ADMIN_NOT_DELETABLE };

    let toggle_variant = if user.is_active {
        ButtonVariant::Secondary
    } else {
        ButtonVariant::Primary
    };
    let toggle_ctl = admin.clone();
    let toggle_user = user.clone();
    let delete_user = user.clone();

    rsx! {
        DataTableRow {
            DataTableCell { strong { "{user.username}" } }
            DataTableCell { "{user.display_name()}" }
            DataTableCell {
                if role.is_admin() {
                    span { class: "admin-role-admin", "{role.display_label()}" }
                } else {
                    "{role.display_label()}"
                }
            }
            DataTableCell {
                Badge { variant: BadgeVariant::for_status(user.is_active), "{user.status_label()}" }
            }
            DataTableCell {
                div { class: "admin-row-actions",
                    Button {
                        variant: toggle_variant,
                        onclick: move |_| {
                            let ctl = toggle_ctl.clone();
                            let user = toggle_user.clone();
                            spawn(async move {
                                ctl.toggle_active(&user).await;
                            });
                        },
                        "{user.toggle_label()}"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: !deletable,
                        hint: delete_hint.to_string(),
                        onclick: move |_| {
                            admin.request_delete(delete_user.clone());
                        },
                        "Xóa"
                    }
                }
            }
        }
    }
}
