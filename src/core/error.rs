use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use crate::core::response::ClientResponseError;
use crate::presentation::endereco::endereco::FieldErrorSerializer;

pub type AppResult<T = ()> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequestError(String),
    #[error("{0}")]
    InvalidPayloadError(String),
    #[error("{detail}")]
    EntityNotFoundError { detail: String },
    #[error("{0}")]
    ExternalServiceError(String),
    #[error("Validação do formulário falhou")]
    ValidationError { errors: Vec<FieldErrorSerializer> },
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl AppError {
    pub fn response(&self) -> (StatusCode, ClientResponseError) {
        let (status, field_errors) = match self {
            AppError::BadRequestError(_) => (StatusCode::BAD_REQUEST, Vec::new()),
            AppError::InvalidPayloadError(_) => (StatusCode::UNPROCESSABLE_ENTITY, Vec::new()),
            AppError::EntityNotFoundError { .. } => (StatusCode::NOT_FOUND, Vec::new()),
            AppError::ExternalServiceError(_) => (StatusCode::BAD_GATEWAY, Vec::new()),
            AppError::ValidationError { errors } => {
                (StatusCode::UNPROCESSABLE_ENTITY, errors.clone())
            },
            AppError::IoError(_) => (StatusCode::INTERNAL_SERVER_ERROR, Vec::new()),
        };

        (
            status,
            ClientResponseError {
                message: self.to_string(),
                field_errors,
            },
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.response();
        (status, Json(body)).into_response()
    }
}
