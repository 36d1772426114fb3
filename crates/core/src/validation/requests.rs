//! Request payloads for registration, login, password change and profile update.
//!
//! Static rules are declared with `#[derive(Validate)]`. Rules that depend on
//! [`ValidationConfig`] (allowed e-mail domains, password length) run in
//! [`CheckedInput::check`], which merges both sets of field errors.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use super::{
    email_domain_allowed, rule_error, validate_birthday, validate_full_name, validate_not_future,
    validate_rut, EMAIL_DOMAIN_MESSAGE, PASSWORD_CONFIRMATION_MESSAGE,
};
use crate::config::ValidationConfig;

/// A payload that can be fully validated against the runtime configuration.
pub trait CheckedInput: Validate {
    /// Run the derived rules plus any configuration-dependent rules.
    fn check(&self, config: &ValidationConfig) -> Result<(), ValidationErrors>;
}

/// Body of `POST /register`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(email(message = "Correo inválido."), length(max = 255))]
    pub email: String,
    #[validate(length(min = 1, max = 255), custom(function = "validate_rut"))]
    pub dni: String,
    #[validate(custom(function = "validate_full_name"))]
    pub full_name: String,
    #[validate(custom(function = "validate_birthday"))]
    pub birthday: NaiveDate,
    #[validate(length(min = 1, message = "La contraseña es obligatoria."))]
    pub password: String,
}

impl CheckedInput for RegisterUser {
    fn check(&self, config: &ValidationConfig) -> Result<(), ValidationErrors> {
        let mut extra = Vec::new();
        if let Some(err) = domain_error(&self.email, config) {
            extra.push(("email", err));
        }
        merge(self.validate(), extra)
    }
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Correo inválido."))]
    pub email: String,
    #[validate(length(min = 1, message = "La contraseña es obligatoria."))]
    pub password: String,
}

impl CheckedInput for LoginRequest {
    fn check(&self, _config: &ValidationConfig) -> Result<(), ValidationErrors> {
        self.validate()
    }
}

/// Body of `PUT /change-password`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePassword {
    #[validate(length(min = 1, message = "La contraseña actual es obligatoria."))]
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

impl CheckedInput for ChangePassword {
    fn check(&self, config: &ValidationConfig) -> Result<(), ValidationErrors> {
        let mut extra = Vec::new();

        let len = self.new_password.chars().count() as u64;
        if len < config.min_password_length {
            extra.push((
                "new_password",
                rule_error(
                    "length",
                    format!(
                        "La contraseña debe tener al menos {} caracteres.",
                        config.min_password_length
                    ),
                ),
            ));
        }
        if self.new_password != self.new_password_confirmation {
            extra.push((
                "new_password",
                rule_error("confirmed", PASSWORD_CONFIRMATION_MESSAGE),
            ));
        }

        merge(self.validate(), extra)
    }
}

/// Body of `PUT /update-profile`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,
    #[validate(email(message = "Correo inválido."), length(max = 255))]
    pub email: Option<String>,
    #[validate(custom(function = "validate_not_future"))]
    pub birthday: Option<NaiveDate>,
}

impl CheckedInput for UpdateProfile {
    fn check(&self, config: &ValidationConfig) -> Result<(), ValidationErrors> {
        let mut extra = Vec::new();
        if let Some(err) = self
            .email
            .as_deref()
            .and_then(|email| domain_error(email, config))
        {
            extra.push(("email", err));
        }
        merge(self.validate(), extra)
    }
}

fn domain_error(email: &str, config: &ValidationConfig) -> Option<ValidationError> {
    if email_domain_allowed(email, &config.allowed_email_domains) {
        None
    } else {
        Some(rule_error("email_domain", EMAIL_DOMAIN_MESSAGE))
    }
}

/// Fold extra field errors into the derived result.
fn merge(
    derived: Result<(), ValidationErrors>,
    extra: Vec<(&'static str, ValidationError)>,
) -> Result<(), ValidationErrors> {
    let mut errors = derived.err().unwrap_or_else(ValidationErrors::new);
    for (field, err) in extra {
        errors.add(field, err);
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
