//! Client-side registration form state.
//!
//! Mirrors the registration screen: every edit stores the new text and
//! immediately re-validates that field, so the user sees feedback before
//! anything is sent. The RUT check is the same [`is_valid_rut`] the server
//! runs, so a value accepted here is never rejected for its check digit
//! later.

use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;

use crate::config::ValidationConfig;
use crate::error::CoreError;
use crate::rut::{is_valid_rut, Rut};
use crate::validation::{email_domain_allowed, validate_full_name, RegisterUser};

/// Birthdays are typed as `DD-MM-YYYY`.
const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

static BIRTHDAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("valid regex"));

/// Fields that carry a validity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Dni,
    FullName,
    Birthday,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Email,
        FormField::Dni,
        FormField::FullName,
        FormField::Birthday,
    ];

    /// Request field name.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Dni => "dni",
            FormField::FullName => "full_name",
            FormField::Birthday => "birthday",
        }
    }

    /// Message displayed under an invalid input.
    pub fn error_message(self) -> &'static str {
        match self {
            FormField::Email => "Correo inválido",
            FormField::Dni => "RUT inválido",
            FormField::FullName => "Nombre inválido",
            FormField::Birthday => "Fecha inválida",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Registration form with per-field validity.
///
/// Fields start out valid so no error is shown before the first edit.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    config: ValidationConfig,
    email: String,
    dni: String,
    full_name: String,
    birthday: String,
    password: String,
    valid: [bool; 4],
}

impl RegistrationForm {
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            email: String::new(),
            dni: String::new(),
            full_name: String::new(),
            birthday: String::new(),
            password: String::new(),
            valid: [true; 4],
        }
    }

    pub fn set_email(&mut self, text: impl Into<String>) -> bool {
        self.email = text.into();
        self.revalidate(FormField::Email)
    }

    pub fn set_dni(&mut self, text: impl Into<String>) -> bool {
        self.dni = text.into();
        self.revalidate(FormField::Dni)
    }

    pub fn set_full_name(&mut self, text: impl Into<String>) -> bool {
        self.full_name = text.into();
        self.revalidate(FormField::FullName)
    }

    pub fn set_birthday(&mut self, text: impl Into<String>) -> bool {
        self.birthday = text.into();
        self.revalidate(FormField::Birthday)
    }

    /// The password is not checked client-side.
    pub fn set_password(&mut self, text: impl Into<String>) {
        self.password = text.into();
    }

    /// Current validity flag of `field`.
    pub fn is_valid(&self, field: FormField) -> bool {
        self.valid[field.index()]
    }

    /// Re-check every field. Returns `true` only if all pass.
    pub fn validate_all(&mut self) -> bool {
        FormField::ALL
            .iter()
            .fold(true, |all, &field| self.revalidate(field) && all)
    }

    /// `(field, message)` for every field currently flagged invalid.
    pub fn errors(&self) -> Vec<(&'static str, &'static str)> {
        FormField::ALL
            .iter()
            .filter(|field| !self.is_valid(**field))
            .map(|field| (field.name(), field.error_message()))
            .collect()
    }

    /// Validate everything and build the request body for submission.
    ///
    /// The RUT is sent in its dotted form and the full name trimmed, so the
    /// server sees exactly what was checked here.
    pub fn into_request(mut self) -> Result<RegisterUser, CoreError> {
        if !self.validate_all() {
            tracing::debug!(errors = ?self.errors(), "Registration form rejected");
            return Err(CoreError::Validation("Datos inválidos".into()));
        }

        let birthday = NaiveDate::parse_from_str(&self.birthday, BIRTHDAY_FORMAT)
            .map_err(|e| CoreError::Internal(format!("Checked birthday failed to parse: {e}")))?;

        let dni = Rut::parse(&self.dni)?;

        Ok(RegisterUser {
            email: self.email,
            dni: dni.to_string(),
            full_name: self.full_name.trim().to_string(),
            birthday,
            password: self.password,
        })
    }

    fn revalidate(&mut self, field: FormField) -> bool {
        let valid = match field {
            FormField::Email => {
                email_domain_allowed(&self.email, &self.config.allowed_email_domains)
            }
            FormField::Dni => is_valid_rut(&self.dni),
            FormField::FullName => validate_full_name(&self.full_name).is_ok(),
            FormField::Birthday => birthday_ok(&self.birthday),
        };
        self.valid[field.index()] = valid;
        tracing::debug!(field = field.name(), valid, "Validated form field");
        valid
    }
}

/// `DD-MM-YYYY`, a real calendar date, not after today.
fn birthday_ok(text: &str) -> bool {
    if !BIRTHDAY_RE.is_match(text) {
        return false;
    }
    NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
        .is_ok_and(|date| date <= Utc::now().date_naive())
}
