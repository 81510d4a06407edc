use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::io;
use thiserror::Error;

/// JSON body every error response carries.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    code: u16,
    message: String,
}

impl ErrorResponse {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Upstream(#[from] reqwest::Error),
    #[error(transparent)]
    Template(#[from] askama::Error),
    #[error("{0}")]
    Fetch(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use ApiError::*;

        let (status, message) = match self {
            QueryRejection(err) => (StatusCode::BAD_REQUEST, err.body_text()),
            Image(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Io(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.kind().to_string()),
            Upstream(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Template(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Fetch(message) => (StatusCode::BAD_REQUEST, message),
            BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned()),
        };

        (
            status,
            Json(ErrorResponse::new(status.as_u16(), message)),
        )
            .into_response()
    }
}
