use anyhow::Result;
use chrono::{DateTime, Utc};
use model::entities::user;
use model::hashers::PasswordHasher;
use model::manager::UserManager;
use model::phone::PhoneNumber;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::initialize_user_manager;

/// Printable view of a user; the password hash is never included
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i32,
    pub phone_number: PhoneNumber,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub has_usable_password: bool,
    pub activation_code: String,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<user::Model> for UserSummary {
    fn from(model: user::Model) -> Self {
        Self {
            has_usable_password: model.has_usable_password(),
            id: model.id,
            phone_number: model.phone_number,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            is_active: model.is_active,
            is_staff: model.is_staff,
            is_superuser: model.is_superuser,
            activation_code: model.activation_code,
            date_joined: model.date_joined,
            last_login: model.last_login,
        }
    }
}

pub async fn show_user(database_url: &str, phone_number: &str) -> Result<()> {
    trace!("Entering show_user function");
    debug!("Database URL: {}", database_url);

    let manager = initialize_user_manager(database_url).await?;
    println!("{}", render_user(&manager, phone_number).await?);
    Ok(())
}

pub async fn render_user<H: PasswordHasher>(
    manager: &UserManager<H>,
    phone_number: &str,
) -> Result<String> {
    let user_model = manager.get_by_natural_key(phone_number).await?;
    Ok(serde_json::to_string_pretty(&UserSummary::from(user_model))?)
}
