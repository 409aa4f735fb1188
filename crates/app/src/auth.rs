//! Authentication port.
//!
//! Session issuance is owned by an external identity service; this crate
//! only resolves a bearer token to a principal. [`StaticAuthService`] is a
//! development stand-in driven by a fixed token table.

use std::collections::HashMap;

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::CustomerUuid;

/// What the principal is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Admin,
}

/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub customer: CustomerUuid,
    pub role: Role,
}

impl Principal {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("unknown or expired token")]
    Unauthenticated,
}

/// Resolves bearer tokens to principals.
#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn authenticate_bearer(&self, token: &str) -> Result<Principal, AuthServiceError>;
}

/// Fixed token table, for local development and tests.
#[derive(Debug, Default)]
pub struct StaticAuthService {
    tokens: HashMap<String, Principal>,
}

impl StaticAuthService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, principal: Principal) -> Self {
        self.tokens.insert(token.into(), principal);
        self
    }
}

#[async_trait]
impl AuthService for StaticAuthService {
    async fn authenticate_bearer(&self, token: &str) -> Result<Principal, AuthServiceError> {
        self.tokens
            .get(token)
            .copied()
            .ok_or(AuthServiceError::Unauthenticated)
    }
}
