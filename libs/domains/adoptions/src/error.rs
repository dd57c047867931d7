use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdoptionError {
    #[error("Adoption not found")]
    NotFound,

    #[error("User not found or invalid")]
    UserNotFound,

    #[error("Pet not found or invalid")]
    PetNotFound,

    #[error("Pet is already adopted")]
    AlreadyAdopted,

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type AdoptionResult<T> = Result<T, AdoptionError>;

/// Convert AdoptionError to AppError for enveloped error responses
impl From<AdoptionError> for AppError {
    fn from(err: AdoptionError) -> Self {
        match err {
            AdoptionError::NotFound => AppError::NotFound("Adoption not found".to_string()),
            AdoptionError::UserNotFound => {
                AppError::NotFound("User not found or invalid".to_string())
            }
            AdoptionError::PetNotFound => {
                AppError::NotFound("Pet not found or invalid".to_string())
            }
            AdoptionError::AlreadyAdopted => {
                AppError::Conflict("Pet is already adopted".to_string())
            }
            AdoptionError::InvalidId(id) => AppError::BadRequest(format!("Invalid id: {}", id)),
            AdoptionError::Repository(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for AdoptionError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
