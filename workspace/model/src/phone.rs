//! Phone number value stored in the `users.phone_number` column.
//!
//! Numbers are kept in E.164 form (`+` followed by the country code and
//! subscriber number, no separators) so that equality in the database
//! matches equality of the dialled number.

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::error::{Result, UserError};

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

/// A phone number normalized to E.164.
#[derive(Clone, Debug, PartialEq, Eq, Hash, DeriveValueType, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses user input into an E.164 phone number.
    ///
    /// Spaces, dashes, dots and parentheses are dropped and an international
    /// `00` prefix is rewritten to `+`. Blank input is reported as
    /// [`UserError::MissingPhoneNumber`].
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserError::MissingPhoneNumber);
        }

        let compact: String = trimmed
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
            .collect();

        let digits = match compact.strip_prefix('+') {
            Some(rest) => rest,
            None => compact
                .strip_prefix("00")
                .ok_or_else(|| UserError::InvalidPhoneNumber(raw.to_string()))?,
        };

        let well_formed = digits.chars().all(|c| c.is_ascii_digit())
            && (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
            && !digits.starts_with('0');
        if !well_formed {
            return Err(UserError::InvalidPhoneNumber(raw.to_string()));
        }

        Ok(Self(format!("+{digits}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
