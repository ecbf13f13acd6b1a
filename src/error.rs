use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Browser window is not available")]
    NoWindow,

    #[error("Failed to read file: {0}")]
    Decode(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Browser API error: {0}")]
    Browser(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::InvalidBody(err.to_string())
        } else {
            ClientError::Request(err.to_string())
        }
    }
}
