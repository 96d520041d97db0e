use std::fmt;

use rand::{Rng, rng};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use tracing::trace;

use crate::hashers::is_password_usable;
use crate::phone::PhoneNumber;

/// Length of the code stamped onto a user on every save.
pub const ACTIVATION_CODE_LENGTH: usize = 10;
/// Characters the activation code is drawn from.
pub const ACTIVATION_CODE_CHARS: &str = "qwerty123456789";

/// Represents an account of the system.
/// Users log in with their phone number; username and email are secondary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Encoded password as produced by the configured hasher.
    pub password: String,
    pub last_login: Option<DateTimeUtc>,
    #[sea_orm(default_value = "false")]
    pub is_superuser: bool,
    /// Display label, neither required nor unique.
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    #[sea_orm(default_value = "false")]
    pub is_staff: bool,
    /// Accounts stay inactive until activated.
    #[sea_orm(default_value = "false")]
    pub is_active: bool,
    pub date_joined: DateTimeUtc,
    /// The login identifier.
    #[sea_orm(unique)]
    pub phone_number: PhoneNumber,
    pub activation_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamps a fresh activation code on every insert and update.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        trace!(insert, "Stamping activation code");
        self.activation_code = Set(Model::generate_activation_code(
            ACTIVATION_CODE_LENGTH,
            ACTIVATION_CODE_CHARS,
        ));
        Ok(self)
    }
}

impl Model {
    /// Random string of `length` characters drawn from `allowed_chars`.
    ///
    /// No check is made against codes already issued.
    pub fn generate_activation_code(length: usize, allowed_chars: &str) -> String {
        let pool: Vec<char> = allowed_chars.chars().collect();
        if pool.is_empty() {
            return String::new();
        }
        let mut rng = rng();
        (0..length)
            .map(|_| pool[rng.random_range(0..pool.len())])
            .collect()
    }

    pub fn has_usable_password(&self) -> bool {
        is_password_usable(&self.password)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.phone_number, f)
    }
}
