use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfilePageError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("GitHub API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    MalformedResponseError(String),

    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQlError(Vec<String>),

    #[error("Environment error: {0}")]
    EnvError(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpointError(String),

    #[error("Page element not found: .{0}")]
    MissingAnchorError(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ProfilePageError {
    /// Text shown in place of the preloader when a page load fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProfilePageError::NetworkError(_) => "Could not reach GitHub. Check your connection and reload.",
            ProfilePageError::AuthError(_) => "GitHub rejected the access token.",
            ProfilePageError::ApiError { .. } | ProfilePageError::GraphQlError(_) => {
                "GitHub returned an error while loading this profile."
            }
            ProfilePageError::JsonError(_) | ProfilePageError::MalformedResponseError(_) => {
                "GitHub returned a response this page could not read."
            }
            ProfilePageError::EnvError(_)
            | ProfilePageError::InvalidEndpointError(_)
            | ProfilePageError::MissingAnchorError(_)
            | ProfilePageError::IoError(_) => "This page is not configured correctly.",
        }
    }

    /// Response status the server uses when a page load fails with this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ProfilePageError::MissingAnchorError(_)
            | ProfilePageError::EnvError(_)
            | ProfilePageError::InvalidEndpointError(_)
            | ProfilePageError::IoError(_) => 500,
            _ => 502,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfilePageError>;
