//! Construction and lookup of user accounts.
//!
//! Every account is created through [`UserManager`], which normalizes the
//! identifying fields and hashes the password exactly once regardless of the
//! entry point used.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, Set,
};
use tracing::{debug, error, info, instrument, trace, warn};

use crate::entities::user;
use crate::error::{Result, UserError};
use crate::hashers::{Argon2Hasher, PasswordHasher, make_password};
use crate::phone::PhoneNumber;

/// Optional fields a caller may set when creating a user.
///
/// Privilege flags left as `None` receive the defaults of the entry point
/// used (`create_user` or `create_superuser`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraFields {
    pub is_active: Option<bool>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Factory and lookup service for [`user::Model`] records.
#[derive(Debug, Clone)]
pub struct UserManager<H = Argon2Hasher> {
    db: DatabaseConnection,
    hasher: H,
}

impl UserManager<Argon2Hasher> {
    /// Manager hashing with default Argon2id parameters.
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_hasher(db, Argon2Hasher::default())
    }
}

impl<H: PasswordHasher> UserManager<H> {
    pub fn with_hasher(db: DatabaseConnection, hasher: H) -> Self {
        Self { db, hasher }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Create and save a user with the given phone number, email, and password.
    #[instrument(skip(self, password))]
    async fn create(
        &self,
        phone_number: &str,
        password: Option<&str>,
        username: Option<&str>,
        email: Option<&str>,
        extra: ExtraFields,
    ) -> Result<user::Model> {
        trace!("Entering UserManager::create");

        let phone_number = PhoneNumber::parse(phone_number).map_err(|err| {
            warn!("Rejected phone number: {}", err);
            err
        })?;
        let email = normalize_email(email);
        let username = username.map(str::to_owned);
        debug!(%phone_number, ?email, ?username, "Normalized user fields");

        trace!("Hashing password");
        let password = make_password(&self.hasher, password)?;

        let new_user = user::ActiveModel {
            id: NotSet,
            password: Set(password),
            last_login: Set(None),
            is_superuser: Set(extra.is_superuser.unwrap_or(false)),
            username: Set(username),
            first_name: Set(extra.first_name.unwrap_or_default()),
            last_name: Set(extra.last_name.unwrap_or_default()),
            email: Set(email),
            is_staff: Set(extra.is_staff.unwrap_or(false)),
            is_active: Set(extra.is_active.unwrap_or(false)),
            date_joined: Set(Utc::now()),
            phone_number: Set(phone_number.clone()),
            activation_code: NotSet,
        };

        trace!("Attempting to insert new user into database");
        match new_user.insert(&self.db).await {
            Ok(user_model) => {
                info!("User created successfully with ID: {}, phone number: {}",
                      user_model.id, user_model.phone_number);
                Ok(user_model)
            }
            Err(db_error) => {
                error!("Failed to create user '{}': {}", phone_number, db_error);
                Err(db_error.into())
            }
        }
    }

    /// Create an ordinary account.
    ///
    /// The account is inactive and unprivileged unless `extra` says otherwise.
    #[instrument(skip(self, password))]
    pub async fn create_user(
        &self,
        phone_number: &str,
        email: Option<&str>,
        password: Option<&str>,
        username: Option<&str>,
        mut extra: ExtraFields,
    ) -> Result<user::Model> {
        extra.is_active.get_or_insert(false);
        extra.is_staff.get_or_insert(false);
        extra.is_superuser.get_or_insert(false);
        self.create(phone_number, password, username, email, extra).await
    }

    /// Create an active account holding every privilege flag.
    ///
    /// `is_active` is always forced on; `is_staff` and `is_superuser` default
    /// to true and explicitly passing `false` for either is an error.
    #[instrument(skip(self, password))]
    pub async fn create_superuser(
        &self,
        phone_number: &str,
        email: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
        mut extra: ExtraFields,
    ) -> Result<user::Model> {
        extra.is_active = Some(true);
        extra.is_staff.get_or_insert(true);
        extra.is_superuser.get_or_insert(true);

        let flags = [
            ("is_active", extra.is_active),
            ("is_staff", extra.is_staff),
            ("is_superuser", extra.is_superuser),
        ];
        if let Some((flag, _)) = flags.iter().find(|(_, value)| *value != Some(true)) {
            error!("Refusing to create superuser without {}", flag);
            return Err(UserError::SuperuserFlag(*flag));
        }

        self.create(phone_number, password, username, email, extra).await
    }

    /// Look a user up by the login identifier.
    #[instrument(skip(self))]
    pub async fn get_by_natural_key(&self, phone_number: &str) -> Result<user::Model> {
        let phone_number = PhoneNumber::parse(phone_number)?;
        trace!("Looking up user by phone number");
        match user::Entity::find()
            .filter(user::Column::PhoneNumber.eq(phone_number.clone()))
            .one(&self.db)
            .await?
        {
            Some(user_model) => {
                debug!("Found user with ID: {}", user_model.id);
                Ok(user_model)
            }
            None => {
                warn!("User with phone number {} not found", phone_number);
                Err(UserError::NotFound(phone_number.to_string()))
            }
        }
    }

    /// Returns the user only if it exists, is active, and the password matches.
    #[instrument(skip(self, password))]
    pub async fn authenticate(
        &self,
        phone_number: &str,
        password: &str,
    ) -> Result<Option<user::Model>> {
        let user_model = match self.get_by_natural_key(phone_number).await {
            Ok(user_model) => user_model,
            Err(
                UserError::NotFound(_)
                | UserError::MissingPhoneNumber
                | UserError::InvalidPhoneNumber(_),
            ) => {
                // Hash anyway so unknown numbers cost the same as wrong passwords
                self.hasher.hash(password)?;
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        if !self.check_password(&user_model, password)? {
            info!("Password mismatch for user ID: {}", user_model.id);
            return Ok(None);
        }
        if !user_model.is_active {
            info!("Rejected login for inactive user ID: {}", user_model.id);
            return Ok(None);
        }
        Ok(Some(user_model))
    }

    pub fn check_password(&self, user_model: &user::Model, password: &str) -> Result<bool> {
        if !user_model.has_usable_password() {
            return Ok(false);
        }
        self.hasher.verify(password, &user_model.password)
    }

    /// Replace the stored password. `None` makes the password unusable.
    #[instrument(skip(self, user_model, password), fields(user_id = user_model.id))]
    pub async fn set_password(
        &self,
        user_model: user::Model,
        password: Option<&str>,
    ) -> Result<user::Model> {
        let mut user_active = user_model.into_active_model();
        user_active.password = Set(make_password(&self.hasher, password)?);

        trace!("Attempting to update password in database");
        let updated = user_active.update(&self.db).await?;
        info!("Password updated for user ID: {}", updated.id);
        Ok(updated)
    }
}

/// Lowercase the domain part of an email address.
///
/// Surrounding whitespace is only stripped from addresses that contain `@`;
/// anything else is kept as given. An empty string becomes `None` so that
/// accounts without an email do not collide on the unique email column.
pub fn normalize_email(email: Option<&str>) -> Option<String> {
    let email = email.filter(|email| !email.is_empty())?;
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => Some(format!("{}@{}", local, domain.to_lowercase())),
        None => Some(email.to_string()),
    }
}
