use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PetError {
    #[error("Pet not found")]
    NotFound,

    #[error("Incomplete values")]
    IncompleteValues,

    #[error("Image file is required")]
    ImageRequired,

    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PetResult<T> = Result<T, PetError>;

/// Convert PetError to AppError for enveloped error responses
impl From<PetError> for AppError {
    fn from(err: PetError) -> Self {
        match err {
            PetError::NotFound => AppError::NotFound("Pet not found".to_string()),
            PetError::IncompleteValues => AppError::BadRequest("Incomplete values".to_string()),
            PetError::ImageRequired => {
                AppError::BadRequest("Image file is required".to_string())
            }
            PetError::Multipart(msg) => AppError::BadRequest(msg),
            PetError::Repository(e) => AppError::InternalServerError(e.to_string()),
            PetError::Io(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for PetError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
