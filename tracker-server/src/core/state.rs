use std::sync::Arc;

use shared::AppError;
use shared::models::{Role, UserCreate};
use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db;
use crate::db::repository::user;
use crate::utils::password;

/// Application state shared by every handler
///
/// Cheap to clone: the pool and JWT service are shared references.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server configuration (immutable after startup)
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt: Arc<JwtService>,
}

impl AppState {
    /// Initialize the application state
    ///
    /// Prepares the working directory, opens the database (running
    /// migrations), builds the token service, and seeds the bootstrap
    /// admin when the account table is empty.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let pool = db::connect(&config.database_path).await?;
        let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));

        let state = Self {
            config: config.clone(),
            pool,
            jwt,
        };

        state.seed_default_admin().await?;

        Ok(state)
    }

    /// Seed one admin account when none exist, so the admin-only
    /// user-creation endpoint is reachable on a fresh install
    async fn seed_default_admin(&self) -> Result<(), AppError> {
        if user::count(&self.pool).await? > 0 {
            return Ok(());
        }

        let password_hash = password::hash(&self.config.admin_password)
            .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

        let admin = UserCreate {
            name: "Administrator".to_string(),
            email: self.config.admin_email.clone(),
            password: String::new(),
            role: Role::Admin,
            is_active: true,
            employee_id: None,
        };
        user::create(&self.pool, &admin, &password_hash).await?;

        tracing::warn!(
            email = %self.config.admin_email,
            "No accounts found, seeded the bootstrap admin"
        );
        Ok(())
    }
}
