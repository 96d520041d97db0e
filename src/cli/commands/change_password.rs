use anyhow::Result;
use model::entities::user;
use model::hashers::PasswordHasher;
use model::manager::UserManager;
use tracing::{info, debug, trace, error};

use crate::config::initialize_user_manager;

pub async fn change_password(database_url: &str, phone_number: &str, password: &str) -> Result<()> {
    trace!("Entering change_password function");
    debug!("Database URL: {}", database_url);

    let manager = initialize_user_manager(database_url).await?;
    let user_model = change_password_with(&manager, phone_number, password).await?;

    println!("Password changed successfully for user '{}'", user_model);
    Ok(())
}

pub async fn change_password_with<H: PasswordHasher>(
    manager: &UserManager<H>,
    phone_number: &str,
    password: &str,
) -> Result<user::Model> {
    let user_model = manager.get_by_natural_key(phone_number).await.map_err(|e| {
        error!("Cannot change password for '{}': {}", phone_number, e);
        e
    })?;

    let updated = manager.set_password(user_model, Some(password)).await?;
    info!("Password changed for user {}", updated);
    Ok(updated)
}
