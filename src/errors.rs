use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("Failed to parse sales payload: {0}")]
    ParseError(String),

    #[error("Failed to access Gemini API: {0}")]
    GeminiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for InsightsError {
    fn from(error: reqwest::Error) -> Self {
        InsightsError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for InsightsError {
    fn from(error: anyhow::Error) -> Self {
        InsightsError::GeminiError(error.to_string())
    }
}
