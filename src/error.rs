use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

use crate::dashboard::Action;

/// Why a dashboard action did not go through. The message is the same
/// string the dashboard records as its current error.
#[derive(Debug, Display)]
pub enum ConsoleError {
    /// The backend call failed.
    #[display(fmt = "{}", _0)]
    Backend(String),

    /// Refused before any request was made.
    #[display(fmt = "{}", _0)]
    Rejected(String),

    #[display(fmt = "{} is already in progress", _0)]
    Busy(Action),

    /// The entity is not in the cached collections.
    #[display(fmt = "{}", _0)]
    NotFound(String),
}

impl std::error::Error for ConsoleError {}

impl ResponseError for ConsoleError {
    fn status_code(&self) -> StatusCode {
        match self {
            ConsoleError::Backend(_) => StatusCode::BAD_GATEWAY,
            ConsoleError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ConsoleError::Busy(_) => StatusCode::CONFLICT,
            ConsoleError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
