use thiserror::Error;

/// Custom error types for text-to-SQL conversion.
#[derive(Error, Debug)]
pub enum Txt2SqlError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to chat API: {0}")]
    ApiRequest(reqwest::Error),
    #[error("Failed to read chat API response body: {0}")]
    ApiResponseRead(reqwest::Error),
    #[error("Chat API request failed with status {status}: {body}")]
    ApiStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Failed to deserialize chat API response: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("Chat API response contained no choices")]
    EmptyChoices,
    #[error("API URL is missing")]
    MissingApiUrl,
    #[error("API key is missing")]
    MissingApiKey,
    #[error("Model name is missing")]
    MissingModelName,
}
