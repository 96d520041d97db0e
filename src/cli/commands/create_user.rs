use anyhow::Result;
use model::entities::user;
use model::hashers::PasswordHasher;
use model::manager::{ExtraFields, UserManager};
use tracing::{info, debug, trace, error};

use crate::config::initialize_user_manager;

pub async fn create_user(
    database_url: &str,
    phone_number: &str,
    email: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    trace!("Entering create_user function");
    debug!("Database URL: {}", database_url);

    let manager = initialize_user_manager(database_url).await?;
    let user_model = create_user_with(&manager, phone_number, email, username, password).await?;

    println!("Created user {} (id {}), inactive until activated", user_model, user_model.id);
    Ok(())
}

pub async fn create_user_with<H: PasswordHasher>(
    manager: &UserManager<H>,
    phone_number: &str,
    email: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<user::Model> {
    if password.is_none() {
        info!("No password given, the account will have an unusable password");
    }

    match manager
        .create_user(phone_number, email, password, username, ExtraFields::default())
        .await
    {
        Ok(user_model) => {
            info!("User {} created", user_model);
            Ok(user_model)
        }
        Err(e) => {
            error!("Failed to create user '{}': {}", phone_number, e);
            Err(e.into())
        }
    }
}
