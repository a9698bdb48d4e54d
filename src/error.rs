//! Error handling

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Template errors
    RenderError(String),

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::RenderError(msg) => {
                tracing::error!("Template error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page")
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Html(format!(
            "<!doctype html><html><body><h1>{}</h1><p>{}</p></body></html>",
            status.as_u16(),
            message
        ));

        (status, body).into_response()
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::RenderError(err.to_string())
    }
}

impl From<crate::logic::explain::transform::MalformedEntry> for AppError {
    fn from(err: crate::logic::explain::transform::MalformedEntry) -> Self {
        AppError::InternalError(err.to_string())
    }
}
