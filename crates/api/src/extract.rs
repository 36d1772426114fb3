//! JSON body extractor that validates before the handler runs.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use ucn_core::validation::CheckedInput;

use crate::error::AppError;
use crate::state::AppState;

/// A JSON request body that has passed [`CheckedInput::check`].
///
/// Use this in place of [`Json`] for any payload with domain rules:
///
/// ```ignore
/// async fn register(ValidatedJson(input): ValidatedJson<RegisterUser>) -> AppResult<StatusCode> {
///     tracing::info!(dni = %input.dni, "registering user");
///     Ok(StatusCode::CREATED)
/// }
/// ```
///
/// Malformed JSON is rejected as [`AppError::BadRequest`]; rule failures as
/// [`AppError::Validation`]. Either way the handler is never called.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest<AppState> for ValidatedJson<T>
where
    T: DeserializeOwned + CheckedInput + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if let Err(errors) = input.check(&state.config) {
            tracing::debug!(error = %errors, "Rejected request payload");
            return Err(AppError::Validation(errors));
        }

        Ok(Self(input))
    }
}
