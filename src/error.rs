//! Error handling for the application
//!
//! Stay-validation failures are not errors: they render back into the
//! availability form (see `pricing::QuoteError`). `AppError` covers the
//! infrastructure failures a request cannot recover from.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the visitor sees; details stay in the logs
    fn public_message(&self) -> &'static str {
        match self {
            AppError::NotFound => "That page does not exist.",
            AppError::Database(_) => "We could not load our room data. Please try again shortly.",
            AppError::Template(_) => "Something went wrong rendering this page.",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head><title>{status} - Naqsh Resort</title></head>
<body style="font-family: serif; text-align: center; padding: 50px;">
    <h1>{status}</h1>
    <p>{message}</p>
    <a href="/">Back to our rooms</a>
</body>
</html>"#,
            status = status.as_u16(),
            message = self.public_message()
        );

        (status, Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
