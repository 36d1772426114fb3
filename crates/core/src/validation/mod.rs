//! Server-side validation rules.
//!
//! Adapts the pure checks in [`crate::rut`] and friends to the `validator`
//! crate's error convention so they can be attached to request DTOs with
//! `#[validate(custom(function = "..."))]`. See [`requests`] for the DTOs.

pub mod requests;

use std::borrow::Cow;

use chrono::{Datelike, NaiveDate, Utc};
use validator::ValidationError;

use crate::rut::is_valid_rut;

pub use requests::{ChangePassword, CheckedInput, LoginRequest, RegisterUser, UpdateProfile};

/// Shown when a RUT fails the Module-11 check.
pub const RUT_CHECK_DIGIT_MESSAGE: &str = "El dígito verificador del RUT no es válido.";

/// Shown when an e-mail address is outside the institutional domains.
pub const EMAIL_DOMAIN_MESSAGE: &str = "El correo debe pertenecer a un dominio institucional.";

/// Shown when a birthday precedes 1900-01-01.
pub const BIRTHDAY_TOO_OLD_MESSAGE: &str =
    "La fecha de nacimiento debe ser posterior a 1899-12-31.";

/// Shown when a birthday is after today.
pub const BIRTHDAY_IN_FUTURE_MESSAGE: &str = "La fecha de nacimiento no puede ser futura.";

/// Shown when the new password and its confirmation differ.
pub const PASSWORD_CONFIRMATION_MESSAGE: &str = "La confirmación de la contraseña no coincide.";

/// Shown when a full name is outside the accepted length.
pub const FULL_NAME_LENGTH_MESSAGE: &str = "El nombre debe tener entre 10 y 150 caracteres.";

/// Full-name length bounds, counted in characters after trimming.
pub const FULL_NAME_MIN: usize = 10;
pub const FULL_NAME_MAX: usize = 150;

/// Earliest accepted birth year.
const MIN_BIRTH_YEAR: i32 = 1900;

/// Build a [`ValidationError`] with a fixed code and human-readable message.
pub(crate) fn rule_error(
    code: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// `validator` rule for Chilean RUT fields.
pub fn validate_rut(value: &str) -> Result<(), ValidationError> {
    if is_valid_rut(value) {
        Ok(())
    } else {
        Err(rule_error("rut", RUT_CHECK_DIGIT_MESSAGE))
    }
}

/// `validator` rule for full names: 10 to 150 characters once surrounding
/// whitespace is trimmed.
pub fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if (FULL_NAME_MIN..=FULL_NAME_MAX).contains(&len) {
        Ok(())
    } else {
        Err(rule_error("length", FULL_NAME_LENGTH_MESSAGE))
    }
}

/// `validator` rule for registration birthdays: year 1900 or later and not
/// after today (UTC).
pub fn validate_birthday(date: &NaiveDate) -> Result<(), ValidationError> {
    if date.year() < MIN_BIRTH_YEAR {
        return Err(rule_error("birthday_too_old", BIRTHDAY_TOO_OLD_MESSAGE));
    }
    validate_not_future(date)
}

/// `validator` rule rejecting dates after today (UTC).
pub fn validate_not_future(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date > Utc::now().date_naive() {
        return Err(rule_error("birthday_in_future", BIRTHDAY_IN_FUTURE_MESSAGE));
    }
    Ok(())
}

/// Returns `true` if `email` has a non-empty local part and its domain is one
/// of `domains` (compared case-insensitively).
pub fn email_domain_allowed(email: &str, domains: &[String]) -> bool {
    email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domains.iter().any(|d| d.eq_ignore_ascii_case(domain))
    })
}
