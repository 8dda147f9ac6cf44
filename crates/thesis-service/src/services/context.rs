//! Service context - dependency container for services
//!
//! Holds the repositories, auth services, and proof storage needed by services.

use std::sync::Arc;

use thesis_common::auth::{JwtService, PasswordService};
use thesis_core::traits::{
    AccountRepository, ApprovalRepository, DefenseRepository, NewsRepository, ThesisRepository,
};
use thesis_db::PgPool;

use crate::storage::ProofStore;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Password hashing service
/// - Payment proof storage
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    account_repo: Arc<dyn AccountRepository>,
    thesis_repo: Arc<dyn ThesisRepository>,
    approval_repo: Arc<dyn ApprovalRepository>,
    defense_repo: Arc<dyn DefenseRepository>,
    news_repo: Arc<dyn NewsRepository>,

    // Storage
    proof_store: Arc<dyn ProofStore>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        account_repo: Arc<dyn AccountRepository>,
        thesis_repo: Arc<dyn ThesisRepository>,
        approval_repo: Arc<dyn ApprovalRepository>,
        defense_repo: Arc<dyn DefenseRepository>,
        news_repo: Arc<dyn NewsRepository>,
        proof_store: Arc<dyn ProofStore>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            account_repo,
            thesis_repo,
            approval_repo,
            defense_repo,
            news_repo,
            proof_store,
            jwt_service,
            password_service: PasswordService::new(),
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the account repository
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the thesis repository
    pub fn thesis_repo(&self) -> &dyn ThesisRepository {
        self.thesis_repo.as_ref()
    }

    /// Get the approval repository
    pub fn approval_repo(&self) -> &dyn ApprovalRepository {
        self.approval_repo.as_ref()
    }

    /// Get the defense repository
    pub fn defense_repo(&self) -> &dyn DefenseRepository {
        self.defense_repo.as_ref()
    }

    /// Get the news repository
    pub fn news_repo(&self) -> &dyn NewsRepository {
        self.news_repo.as_ref()
    }

    // === Storage ===

    /// Get the payment proof store
    pub fn proof_store(&self) -> &dyn ProofStore {
        self.proof_store.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password hashing service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("proof_store", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    account_repo: Option<Arc<dyn AccountRepository>>,
    thesis_repo: Option<Arc<dyn ThesisRepository>>,
    approval_repo: Option<Arc<dyn ApprovalRepository>>,
    defense_repo: Option<Arc<dyn DefenseRepository>>,
    news_repo: Option<Arc<dyn NewsRepository>>,
    proof_store: Option<Arc<dyn ProofStore>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            account_repo: None,
            thesis_repo: None,
            approval_repo: None,
            defense_repo: None,
            news_repo: None,
            proof_store: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn thesis_repo(mut self, repo: Arc<dyn ThesisRepository>) -> Self {
        self.thesis_repo = Some(repo);
        self
    }

    pub fn approval_repo(mut self, repo: Arc<dyn ApprovalRepository>) -> Self {
        self.approval_repo = Some(repo);
        self
    }

    pub fn defense_repo(mut self, repo: Arc<dyn DefenseRepository>) -> Self {
        self.defense_repo = Some(repo);
        self
    }

    pub fn news_repo(mut self, repo: Arc<dyn NewsRepository>) -> Self {
        self.news_repo = Some(repo);
        self
    }

    pub fn proof_store(mut self, store: Arc<dyn ProofStore>) -> Self {
        self.proof_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.account_repo
                .ok_or_else(|| ServiceError::validation("account_repo is required"))?,
            self.thesis_repo
                .ok_or_else(|| ServiceError::validation("thesis_repo is required"))?,
            self.approval_repo
                .ok_or_else(|| ServiceError::validation("approval_repo is required"))?,
            self.defense_repo
                .ok_or_else(|| ServiceError::validation("defense_repo is required"))?,
            self.news_repo
                .ok_or_else(|| ServiceError::validation("news_repo is required"))?,
            self.proof_store
                .ok_or_else(|| ServiceError::validation("proof_store is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
