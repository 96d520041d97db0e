#[cfg(test)]
pub mod test_utils {
    use crate::cli::commands::initdb::run_migrations;
    use argon2::Params;
    use model::hashers::Argon2Hasher;
    use model::manager::UserManager;
    use sea_orm::{Database, DatabaseConnection};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        run_migrations(&db)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Create a UserManager over a migrated in-memory database.
    ///
    /// Uses cheap Argon2 parameters so tests don't spend their time hashing.
    pub async fn setup_test_manager() -> UserManager {
        let _guard = init_test_tracing();

        let db = setup_test_db().await;
        let params = Params::new(1024, 1, 1, None).expect("Invalid Argon2 parameters");
        UserManager::with_hasher(db, Argon2Hasher::with_params(params))
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}
