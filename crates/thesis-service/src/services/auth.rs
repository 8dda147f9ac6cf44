//! Authentication service
//!
//! Handles login across the three account tables. There is no
//! self-registration: administrators provision every account.

use tracing::{info, instrument, warn};
use validator::Validate;

use thesis_common::AppError;

use crate::dto::{AccountResponse, AuthResponse, LoginRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password.
    ///
    /// The lookup checks the three account tables in a fixed order
    /// (admins, faculty, students); cross-class email uniqueness means at
    /// most one can match. A missing account and a wrong password produce
    /// the same error so the endpoint does not reveal which emails exist.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;

        let (account, password_hash) = self
            .ctx
            .account_repo()
            .find_for_login(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: account not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .map_err(|e| {
                warn!(account_id = %account.id(), "Login failed: password mismatch");
                ServiceError::App(e)
            })?;

        let token = self
            .ctx
            .jwt_service()
            .issue_token(account.id(), account.role())?;

        info!(account_id = %account.id(), role = %account.role(), "Login successful");

        Ok(AuthResponse {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user: AccountResponse::from(&account),
        })
    }
}
