use thiserror::Error;

#[derive(Error, Debug)]
pub enum SenseiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No input provided - empty stdin")]
    NoInput,

    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("LLM client error: {0}")]
    LlmClientError(String),

    #[error("LLM analysis timeout after {timeout} seconds")]
    AnalysisTimeout { timeout: u64 },

    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),

    #[error("Follow-up answer unavailable: {0}")]
    AnalysisUnavailable(String),

    #[error("Snippet too large for analysis - token limit exceeded")]
    TokenLimitExceeded,

    #[error("History store error: {0}")]
    HistoryError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
