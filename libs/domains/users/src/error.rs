use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("User already exists")]
    AlreadyExists,

    #[error("Incomplete values")]
    IncompleteValues,

    // Login with an unknown email is a 404, unlike the generic NotFound text
    #[error("User doesn't exist")]
    DoesNotExist,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("No files were uploaded")]
    NoFiles,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("No session")]
    NoSession,

    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for enveloped error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => AppError::NotFound("User not found".to_string()),
            UserError::DoesNotExist => AppError::NotFound("User doesn't exist".to_string()),
            UserError::AlreadyExists => AppError::Conflict("User already exists".to_string()),
            UserError::IncompleteValues => AppError::BadRequest("Incomplete values".to_string()),
            UserError::IncorrectPassword => AppError::BadRequest("Incorrect password".to_string()),
            UserError::NoFiles => AppError::BadRequest("No files were uploaded".to_string()),
            UserError::NoSession => AppError::BadRequest("No session".to_string()),
            UserError::NotAuthenticated => {
                AppError::Unauthorized("Not authenticated".to_string())
            }
            UserError::InvalidToken => {
                AppError::Unauthorized("Invalid or expired token".to_string())
            }
            UserError::Multipart(msg) => AppError::BadRequest(msg),
            UserError::PasswordHash(msg) => AppError::InternalServerError(msg),
            UserError::Repository(e) => AppError::InternalServerError(e.to_string()),
            UserError::Io(e) => AppError::InternalServerError(e.to_string()),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
