use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::warn;

/// Error types for user account operations
#[derive(Error, Debug)]
pub enum UserError {
    /// No phone number was supplied when constructing a user
    #[error("The given phone_number must be set")]
    MissingPhoneNumber,

    /// The phone number could not be normalized to E.164
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    /// A superuser was requested with one of its privilege flags not set
    #[error("Superuser must have {0}=true")]
    SuperuserFlag(&'static str),

    /// A unique column (email or phone number) already holds this value
    #[error("Integrity error: {0}")]
    Duplicate(String),

    /// No user matches the given natural key
    #[error("User not found: {0}")]
    NotFound(String),

    /// Error from the password hasher
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for UserError {
    fn from(error: DbErr) -> Self {
        match error.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => {
                warn!(%message, "Unique constraint violated");
                UserError::Duplicate(message)
            }
            _ => UserError::Database(error),
        }
    }
}

impl From<argon2::password_hash::Error> for UserError {
    fn from(error: argon2::password_hash::Error) -> Self {
        UserError::PasswordHash(error.to_string())
    }
}

/// Type alias for Result with UserError
pub type Result<T> = std::result::Result<T, UserError>;
