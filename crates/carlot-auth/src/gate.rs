//! Per-request authorization policy.
//!
//! Every inbound operation is classified once in [`Operation::access`].
//! Transport bindings call [`AuthorizationGate::authorize`] before any
//! identity or inventory work happens.

use std::fmt;
use std::str::FromStr;

use carlot_core::error::{AppError, ErrorKind};
use carlot_core::result::AppResult;

use crate::jwt::{Claims, JwtDecoder};

/// What a caller must present to run an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No token inspected.
    Public,
    /// Any valid access token.
    Authenticated,
    /// A valid access token with `admin = true`.
    Admin,
}

/// Every operation exposed by the transport bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SignUp,
    SignUpAdmin,
    Login,
    Refresh,
    CreateCar,
    GetCar,
    UpdateCar,
    DeleteCar,
    GetAllCars,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Self::SignUp,
        Self::SignUpAdmin,
        Self::Login,
        Self::Refresh,
        Self::CreateCar,
        Self::GetCar,
        Self::UpdateCar,
        Self::DeleteCar,
        Self::GetAllCars,
    ];

    pub fn access(self) -> Access {
        match self {
            Self::SignUp | Self::Login | Self::Refresh => Access::Public,
            Self::SignUpAdmin | Self::DeleteCar => Access::Admin,
            Self::CreateCar | Self::GetCar | Self::UpdateCar | Self::GetAllCars => {
                Access::Authenticated
            }
        }
    }

    /// RPC method name, `Service/Method`.
    pub fn method(self) -> &'static str {
        match self {
            Self::SignUp => "UserService/SignUpUser",
            Self::SignUpAdmin => "UserService/SignUpAdmin",
            Self::Login => "UserService/Login",
            Self::Refresh => "UserService/RefreshToken",
            Self::CreateCar => "CarService/CreateCar",
            Self::GetCar => "CarService/GetCar",
            Self::UpdateCar => "CarService/UpdateCar",
            Self::DeleteCar => "CarService/DeleteCar",
            Self::GetAllCars => "CarService/GetAllCars",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let method = s.trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|op| op.method() == method)
            .ok_or_else(|| AppError::validation(format!("Unknown method: {s}")))
    }
}

/// Checks bearer tokens against the operation table.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    decoder: JwtDecoder,
}

impl AuthorizationGate {
    pub fn new(decoder: JwtDecoder) -> Self {
        Self { decoder }
    }

    /// Decide whether a request may run `operation`.
    ///
    /// `authorization` is the raw header value (`Bearer <token>`).
    /// Public operations never look at it and yield `None`.
    pub fn authorize(
        &self,
        operation: Operation,
        authorization: Option<&str>,
    ) -> AppResult<Option<Claims>> {
        self.check(operation.access(), authorization)
    }

    /// Apply one access level to a request.
    pub fn check(&self, access: Access, authorization: Option<&str>) -> AppResult<Option<Claims>> {
        match access {
            Access::Public => Ok(None),
            Access::Authenticated => self.authenticate(authorization).map(Some),
            Access::Admin => {
                let claims = self.authenticate(authorization)?;
                if !claims.admin {
                    return Err(AppError::forbidden("Operation requires an admin token"));
                }
                Ok(Some(claims))
            }
        }
    }

    /// Validate the bearer token without a role check.
    pub fn authenticate(&self, authorization: Option<&str>) -> AppResult<Claims> {
        let token = authorization
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::unauthenticated("Missing bearer token"))?;

        self.decoder.decode_access(token).map_err(|e| match e.kind {
            ErrorKind::TokenExpired => e,
            _ => AppError::unauthenticated(e.message),
        })
    }
}
