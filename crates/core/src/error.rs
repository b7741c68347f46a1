#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(reqwest::Error),
    #[error("cannot connect to completion service at {0}")]
    CompletionConnection(String),
    #[error("completion request timed out after {0}s")]
    CompletionTimeout(u64),
    #[error("completion request failed: {0}")]
    CompletionTransport(reqwest::Error),
    #[error("completion service returned {status}: {body}")]
    CompletionStatus { status: u16, body: String },
    #[error("failed to decode completion response: {0}")]
    CompletionDecode(reqwest::Error),
    #[error("completion response contained no text")]
    EmptyCompletion,
}

pub type GuideResult<T> = std::result::Result<T, GuideError>;
