//! Unified application error types for Carlot.
//!
//! Every crate maps its internal failures into [`AppError`] so the
//! transport bindings can turn a single [`ErrorKind`] into a status code.

use std::fmt;
use thiserror::Error;

/// Error categories shared by the whole application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A subject with the requested login already exists.
    LoginTaken,
    /// Login or password is wrong. Never says which.
    InvalidCredentials,
    /// A token failed signature, format, or claim checks.
    TokenInvalid,
    /// A token is past its expiry.
    TokenExpired,
    /// Access and refresh tokens disagree on subject or role.
    ClaimMismatch,
    /// The presented refresh token is not the most recently issued one.
    RefreshTokenRevoked,
    /// The requested resource was not found.
    NotFound,
    /// The caller is authenticated but lacks the required role.
    Forbidden,
    /// No usable credential was presented.
    Unauthenticated,
    /// The durable store or the cache could not be reached.
    StoreUnavailable,
    /// Input validation failed.
    Validation,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::LoginTaken => "LOGIN_TAKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::TokenInvalid => "TOKEN_INVALID",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::ClaimMismatch => "CLAIM_MISMATCH",
            Self::RefreshTokenRevoked => "REFRESH_TOKEN_REVOKED",
            Self::NotFound => "NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::Validation => "VALIDATION",
            Self::Serialization => "SERIALIZATION",
            Self::Configuration => "CONFIGURATION",
            Self::Internal => "INTERNAL",
        };
        f.write_str(code)
    }
}

/// The unified application error used throughout Carlot.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn login_taken(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LoginTaken, message)
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "Invalid login or password")
    }

    pub fn token_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenInvalid, message)
    }

    pub fn token_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenExpired, message)
    }

    pub fn claim_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ClaimMismatch, message)
    }

    pub fn refresh_token_revoked(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RefreshTokenRevoked, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    /// Wrap a durable-store or cache transport failure.
    pub fn store_unavailable(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(ErrorKind::StoreUnavailable, message, source)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether this error came from an unreachable backend.
    pub fn is_unavailable(&self) -> bool {
        self.kind == ErrorKind::StoreUnavailable
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
