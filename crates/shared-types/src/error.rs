use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of failures reported by the backend or the transport.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    InternalError,
    /// The request never produced an HTTP response.
    Network,
    /// The response arrived but its body could not be decoded.
    Decode,
}

impl AppErrorKind {
    /// Map an HTTP status code to its error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            _ => AppErrorKind::InternalError,
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Body shape the backend uses for error responses. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure of a backend call, as seen by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    /// HTTP status when the server answered.
    pub status: Option<u16>,
    /// Human-readable message supplied by the server, if any.
    pub message: Option<String>,
    /// Diagnostic detail for logs; never shown to the user.
    #[serde(default)]
    pub detail: String,
}

impl AppError {
    /// Build an error from a non-success response and its raw body.
    ///
    /// The body is parsed as [`ApiErrorBody`]; anything that is not JSON is
    /// kept only as diagnostic detail.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        Self {
            kind: AppErrorKind::from_status(status),
            status: Some(status),
            message,
            detail: body.to_string(),
        }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            status: None,
            message: None,
            detail: detail.into(),
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Decode,
            status: None,
            message: None,
            detail: detail.into(),
        }
    }

    /// The server-provided message, ignoring blank strings.
    pub fn server_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }

    /// The server message when present, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// Whether the server answered at all (as opposed to a transport failure).
    pub fn has_response(&self) -> bool {
        self.status.is_some()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.server_message()) {
            (Some(status), Some(msg)) => write!(f, "{} ({}): {}", self.kind, status, msg),
            (Some(status), None) => write!(f, "{} ({})", self.kind, status),
            (None, _) => write!(f, "{}: {}", self.kind, self.detail),
        }
    }
}

impl std::error::Error for AppError {}
