//! Authentication extractors
//!
//! Extracts and validates JWT tokens from the Authorization header, with
//! role-scoped wrappers so handlers declare who may call them.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use thesis_core::AccountRole;
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated account extracted from the JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Account ID from the JWT token
    pub account_id: Uuid,
    /// Account class from the JWT token
    pub role: AccountRole,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(account_id: Uuid, role: AccountRole) -> Self {
        Self { account_id, role }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .decode_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract account ID from claims
        let account_id = claims.account_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid account ID in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthUser::new(account_id, claims.role))
    }
}

macro_rules! role_extractor {
    ($name:ident, $role:path, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone)]
        pub struct $name(pub AuthUser);

        #[async_trait]
        impl<S> FromRequestParts<S> for $name
        where
            S: Send + Sync,
            AppState: FromRef<S>,
        {
            type Rejection = ApiError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                let auth = AuthUser::from_request_parts(parts, state).await?;
                if auth.role != $role {
                    return Err(ApiError::App(
                        thesis_common::AppError::InsufficientPermissions,
                    ));
                }
                Ok($name(auth))
            }
        }
    };
}

role_extractor!(
    AdminUser,
    AccountRole::Administrator,
    "Authenticated administrator; rejects other classes with 403"
);
role_extractor!(
    FacultyUser,
    AccountRole::Faculty,
    "Authenticated faculty member; rejects other classes with 403"
);
role_extractor!(
    StudentUser,
    AccountRole::Student,
    "Authenticated student; rejects other classes with 403"
);
