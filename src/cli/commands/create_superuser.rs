use anyhow::{Result, bail};
use model::entities::user;
use model::hashers::PasswordHasher;
use model::manager::{ExtraFields, UserManager};
use tracing::{info, debug, trace, error, warn};

use crate::config::{SUPERUSER_PASSWORD_ENV, initialize_user_manager};

pub async fn create_superuser(
    database_url: &str,
    phone_number: &str,
    username: &str,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    trace!("Entering create_superuser function");
    debug!("Database URL: {}", database_url);

    let manager = initialize_user_manager(database_url).await?;
    let user_model =
        create_superuser_with(&manager, phone_number, username, email, password).await?;

    println!("Superuser {} created successfully.", user_model);
    Ok(())
}

pub async fn create_superuser_with<H: PasswordHasher>(
    manager: &UserManager<H>,
    phone_number: &str,
    username: &str,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<user::Model> {
    if username.trim().is_empty() {
        error!("Superuser username must not be blank");
        bail!("username must not be blank");
    }
    if password.is_none() {
        warn!(
            "No password given (use --password or {}), the superuser will not be able to log in",
            SUPERUSER_PASSWORD_ENV
        );
    }

    match manager
        .create_superuser(phone_number, email, Some(username), password, ExtraFields::default())
        .await
    {
        Ok(user_model) => {
            info!("Superuser {} created", user_model);
            Ok(user_model)
        }
        Err(e) => {
            error!("Failed to create superuser '{}': {}", phone_number, e);
            Err(e.into())
        }
    }
}
