use anyhow::Result;
use model::manager::UserManager;
use sea_orm::{Database, DatabaseConnection};
use tracing::{debug, error, info};

/// Database used when neither `--database-url` nor `DATABASE_URL` is given
pub const DEFAULT_DATABASE_URL: &str = "sqlite://phoneauth.db?mode=rwc";

/// Environment variable consulted for the superuser password
pub const SUPERUSER_PASSWORD_ENV: &str = "PHONEAUTH_SUPERUSER_PASSWORD";

/// Load `.env` into the process environment, if present
pub fn load_env() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => error!("Failed to load .env file: {}", e),
    }
}

/// Connect to the database
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to database: {}", database_url);
    match Database::connect(database_url).await {
        Ok(connection) => {
            debug!("Database connection established");
            Ok(connection)
        }
        Err(e) => {
            error!("Failed to connect to database '{}': {}", database_url, e);
            Err(e.into())
        }
    }
}

/// Build a user manager on top of a fresh connection
pub async fn initialize_user_manager(database_url: &str) -> Result<UserManager> {
    let db = connect(database_url).await?;
    Ok(UserManager::new(db))
}
