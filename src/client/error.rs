use derive_more::Display;

/// Failure of a single backend call.
///
/// The backend has no structured error taxonomy, so `Http` carries the raw
/// status and body text and its `Display` is what the dashboard shows.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "HTTP error! Status: {} - {}", status, body)]
    Http { status: u16, body: String },

    #[display(fmt = "{}", _0)]
    Transport(reqwest::Error),

    #[display(fmt = "Unreadable response from {}: {}", path, reason)]
    Decode { path: String, reason: String },
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}
