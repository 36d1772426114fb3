/// Institutional domains accepted for registration e-mail addresses.
const DEFAULT_EMAIL_DOMAINS: &str = "ucn.cl,alumnos.ucn.cl,disc.ucn.cl,ce.ucn.cl";

/// Default minimum length for a new password.
const DEFAULT_MIN_PASSWORD_LENGTH: u64 = 6;

/// Validation settings shared by the request layer and the registration form.
///
/// All fields have defaults matching the deployed institution. Override via
/// environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Lower-cased e-mail domains allowed at registration and profile update.
    pub allowed_email_domains: Vec<String>,
    /// Minimum length for `new_password` on password change (default: `6`).
    pub min_password_length: u64,
}

impl ValidationConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                       |
    /// |-------------------------|-----------------------------------------------|
    /// | `ALLOWED_EMAIL_DOMAINS` | `ucn.cl,alumnos.ucn.cl,disc.ucn.cl,ce.ucn.cl` |
    /// | `MIN_PASSWORD_LENGTH`   | `6`                                           |
    ///
    /// # Panics
    ///
    /// Panics if `MIN_PASSWORD_LENGTH` is not a valid `u64` or if the domain
    /// list is empty after parsing.
    pub fn from_env() -> Self {
        let allowed_email_domains = parse_domains(
            &std::env::var("ALLOWED_EMAIL_DOMAINS")
                .unwrap_or_else(|_| DEFAULT_EMAIL_DOMAINS.into()),
        );
        assert!(
            !allowed_email_domains.is_empty(),
            "ALLOWED_EMAIL_DOMAINS must list at least one domain"
        );

        let min_password_length: u64 = std::env::var("MIN_PASSWORD_LENGTH")
            .unwrap_or_else(|_| DEFAULT_MIN_PASSWORD_LENGTH.to_string())
            .parse()
            .expect("MIN_PASSWORD_LENGTH must be a valid u64");

        Self {
            allowed_email_domains,
            min_password_length,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allowed_email_domains: parse_domains(DEFAULT_EMAIL_DOMAINS),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

/// Split a comma-separated domain list, trimming blanks and lower-casing.
fn parse_domains(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
