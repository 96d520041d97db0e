use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, Salt, SaltString},
    PasswordHasher as _, PasswordVerifier as _,
};
use rand::distr::Alphanumeric;
use rand::{Rng, TryRngCore, rng, rngs::OsRng};

use crate::error::{Result, UserError};

/// Marks a stored password that no raw password can match.
pub const UNUSABLE_PASSWORD_PREFIX: char = '!';
const UNUSABLE_PASSWORD_SUFFIX_LENGTH: usize = 40;

/// Credential hashing service injected into the user manager.
///
/// Implementations produce self-describing encoded strings (salt and
/// parameters included) so that `verify` needs nothing but the stored value.
pub trait PasswordHasher: Send + Sync {
    /// Hash a raw password for storage.
    fn hash(&self, password: &str) -> Result<String>;

    /// Check a raw password against a value produced by [`PasswordHasher::hash`].
    fn verify(&self, password: &str, encoded: &str) -> Result<bool>;
}

/// Argon2id hasher producing PHC strings.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    const SALT_LENGTH: usize = Salt::RECOMMENDED_LENGTH;

    /// Build a hasher with caller-specified Argon2 parameters (useful for
    /// tests, where the default memory cost makes every hash slow).
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::default(), params),
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::with_params(Params::default())
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String> {
        let mut salt_bytes = [0u8; Self::SALT_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt_bytes)
            .map_err(|err| UserError::PasswordHash(err.to_string()))?;
        let salt = SaltString::encode_b64(&salt_bytes)?;
        Ok(self.argon2.hash_password(password.as_bytes(), &salt)?.to_string())
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool> {
        if !is_password_usable(encoded) {
            return Ok(false);
        }
        let parsed = PasswordHash::new(encoded)?;
        Ok(self.argon2.verify_password(password.as_bytes(), &parsed).is_ok())
    }
}

/// Produce the value stored in `users.password`.
///
/// `None` yields an unusable password: the prefix followed by random
/// characters, so two users without passwords never share a stored value.
pub fn make_password<H: PasswordHasher + ?Sized>(
    hasher: &H,
    password: Option<&str>,
) -> Result<String> {
    match password {
        Some(raw) => hasher.hash(raw),
        None => {
            let suffix: String = rng()
                .sample_iter(&Alphanumeric)
                .take(UNUSABLE_PASSWORD_SUFFIX_LENGTH)
                .map(char::from)
                .collect();
            Ok(format!("{UNUSABLE_PASSWORD_PREFIX}{suffix}"))
        }
    }
}

pub fn is_password_usable(encoded: &str) -> bool {
    !encoded.is_empty() && !encoded.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

#[cfg(test)]
pub(crate) fn fast_hasher() -> Argon2Hasher {
    Argon2Hasher::with_params(Params::new(1024, 1, 1, None).unwrap())
}
