use crate::auth::JwtConfig;

/// Server configuration
///
/// Built once at startup and carried in [`AppState`](super::AppState);
/// nothing reads the environment after that.
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | DATABASE_PATH | {WORK_DIR}/tracker.db | SQLite file |
/// | HTTP_PORT | 8000 | HTTP port |
/// | JWT_SECRET | generated (dev only) | Token signing secret |
/// | JWT_EXPIRATION_MINUTES | 60 | Token lifetime |
/// | UNIQUE_EMPLOYEE_LINK | false | One account per employee |
/// | ADMIN_EMAIL | admin@example.com | Bootstrap admin account |
/// | ADMIN_PASSWORD | change-me-admin | Bootstrap admin password |
/// | ENVIRONMENT | development | development \| staging \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and logs
    pub work_dir: String,
    /// SQLite database file path
    pub database_path: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Running environment: development | staging | production
    pub environment: String,
    /// Enforce at most one account per employee record
    pub unique_employee_link: bool,
    /// Bootstrap admin credentials, used only when no accounts exist yet
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| format!("{work_dir}/tracker.db")),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            unique_employee_link: std::env::var("UNIQUE_EMPLOYEE_LINK")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@example.com".into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "change-me-admin".into()),
            work_dir,
        }
    }

    /// Override the filesystem locations and port, keeping the rest
    ///
    /// Mostly for tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        let work_dir = work_dir.into();
        config.database_path = format!("{work_dir}/tracker.db");
        config.work_dir = work_dir;
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
