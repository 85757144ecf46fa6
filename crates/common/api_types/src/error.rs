use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use voxylon_registry::errors::RegistryError;

use crate::responses::MessageResponse;

/// HTTP-facing error. The display string is the client-visible message,
/// rendered as a `{ "message": ... }` JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    TooManyRequests(String),

    #[error("{0}")]
    InternalError(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(MessageResponse {
            message: self.to_string(),
        })
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DeadlinePassed
            | RegistryError::MissingField(_)
            | RegistryError::InvalidAddress
            | RegistryError::InvalidValidatorKeyFormat
            | RegistryError::InvalidSignatureFormat
            | RegistryError::SignatureMismatch => ApiError::BadRequest(err.to_string()),
            RegistryError::AddressAlreadyRegistered
            | RegistryError::ValidatorKeyAlreadyRegistered
            | RegistryError::DuplicateRegistration => ApiError::Conflict(err.to_string()),
            RegistryError::StoreUnavailable(_) => {
                ApiError::InternalError("Registration store unavailable. Please retry.".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        assert_eq!(
            ApiError::from(RegistryError::DeadlinePassed).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(RegistryError::AddressAlreadyRegistered).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(RegistryError::DuplicateRegistration).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn store_faults_do_not_leak_detail() {
        let err = ApiError::from(RegistryError::StoreUnavailable(
            voxylon_storage::errors::StoreError::ReadOnly,
        ));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Registration store unavailable. Please retry.");
    }
}
