use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Display label for the administrator role.
pub const ADMIN_LABEL: &str = "Quản trị viên";
/// Display label for the teacher role.
pub const TEACHER_LABEL: &str = "Giảng viên";

/// Whitespace as browsers count it in form rules: Unicode `White_Space`
/// without NEL, plus the byte order mark.
const FORM_SPACE: &str = concat!(
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
);

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{FORM_SPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

/// Normalized user role.
///
/// The backend spells roles either bare (`ADMIN`) or prefixed (`ROLE_ADMIN`),
/// in any case. Unrecognized values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    #[default]
    Teacher,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "ADMIN" | "ROLE_ADMIN" => Role::Admin,
            "TEACHER" | "ROLE_TEACHER" => Role::Teacher,
            _ => Role::Other(raw.to_string()),
        }
    }

    /// Value sent to the backend when creating a user.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::Teacher => "TEACHER",
            Role::Other(raw) => raw,
        }
    }

    /// Localized label; unknown roles pass through unchanged.
    pub fn display_label(&self) -> &str {
        match self {
            Role::Admin => ADMIN_LABEL,
            Role::Teacher => TEACHER_LABEL,
            Role::Other(raw) => raw,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user record as returned by `GET /admin/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl User {
    pub fn role(&self) -> Role {
        Role::parse(self.role.as_deref().unwrap_or_default())
    }

    /// Full name for the table, `N/A` when missing or empty.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "N/A",
        }
    }

    /// Administrators can never be deleted from this screen.
    pub fn can_delete(&self) -> bool {
        !self.role().is_admin()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Hoạt động"
        } else {
            "Vô hiệu hóa"
        }
    }

    /// Label of the button that flips the activation status.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_active {
            "Vô hiệu"
        } else {
            "Kích hoạt"
        }
    }

    /// Question asked before flipping the activation status.
    pub fn toggle_confirm_message(&self) -> String {
        let action = if self.is_active {
            "vô hiệu hóa"
        } else {
            "kích hoạt"
        };
        format!("Bạn có chắc muốn {action} tài khoản \"{}\"?", self.username)
    }

    /// Case-insensitive substring match on username or full name.
    ///
    /// `keyword` must already be lowercased and trimmed.
    fn matches_keyword(&self, keyword: &str) -> bool {
        keyword.is_empty()
            || self.username.to_lowercase().contains(keyword)
            || self
                .full_name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(keyword))
    }
}

/// Role filter offered above the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Admin,
    Teacher,
}

impl RoleFilter {
    /// Value used by the filter `<select>`.
    pub fn as_value(&self) -> &'static str {
        match self {
            RoleFilter::All => "ALL",
            RoleFilter::Admin => "ADMIN",
            RoleFilter::Teacher => "TEACHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoleFilter::All => "Tất cả vai trò",
            RoleFilter::Admin => ADMIN_LABEL,
            RoleFilter::Teacher => TEACHER_LABEL,
        }
    }

    /// Parse a `<select>` value. Anything other than `ALL`/`ADMIN` filters teachers.
    pub fn from_value(value: &str) -> Self {
        match value {
            "ALL" => RoleFilter::All,
            "ADMIN" => RoleFilter::Admin,
            _ => RoleFilter::Teacher,
        }
    }

    pub fn matches(&self, role: &Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Admin => matches!(role, Role::Admin),
            RoleFilter::Teacher => matches!(role, Role::Teacher),
        }
    }
}

pub const ROLE_FILTERS: &[RoleFilter] =
    &[RoleFilter::All, RoleFilter::Admin, RoleFilter::Teacher];

/// Users matching a search keyword and a role filter, in list order.
pub fn filter_users(users: &[User], keyword: &str, filter: RoleFilter) -> Vec<User> {
    let keyword = keyword.trim().to_lowercase();
    users
        .iter()
        .filter(|u| u.matches_keyword(&keyword))
        .filter(|u| filter.matches(&u.role()))
        .cloned()
        .collect()
}

/// Request body for `POST /admin/users`; also the state of the create form.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

impl Default for CreateUserRequest {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            full_name: String::new(),
            email: String::new(),
            role: Role::Teacher.as_str().to_string(),
        }
    }
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}

/// First rule a new-user draft breaks. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("Username phải có ít nhất 3 ký tự!")]
    UsernameTooShort,
    #[error("Username không được chứa khoảng trắng!")]
    UsernameHasWhitespace,
    #[error("Mật khẩu phải có ít nhất 6 ký tự!")]
    PasswordTooShort,
    #[error("Họ và tên không được để trống!")]
    FullNameBlank,
    #[error("Email không đúng định dạng!")]
    InvalidEmail,
}

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Length in UTF-16 code units, the unit the minimum lengths are stated in.
fn form_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn is_form_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Check a draft rule by rule, stopping at the first failure.
pub fn validate_new_user(draft: &CreateUserRequest) -> Result<(), UserValidationError> {
    if form_len(&draft.username) < MIN_USERNAME_LEN {
        return Err(UserValidationError::UsernameTooShort);
    }
    if draft.username.chars().any(is_form_space) {
        return Err(UserValidationError::UsernameHasWhitespace);
    }
    if form_len(&draft.password) < MIN_PASSWORD_LEN {
        return Err(UserValidationError::PasswordTooShort);
    }
    if draft.full_name.chars().all(is_form_space) {
        return Err(UserValidationError::FullNameBlank);
    }
    if !EMAIL_RE.is_match(&draft.email) {
        return Err(UserValidationError::InvalidEmail);
    }
    Ok(())
}
