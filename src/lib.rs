pub mod analyzer;
pub mod cli;
pub mod error;
pub mod history;
pub mod models;

pub use error::SenseiError;

// Re-export commonly used types
pub use models::{
    AnalysisKind, AnalysisReport, AnalysisRequest, Conversation, FollowUpExchange, Snippet,
    SnippetSource,
};

pub use analyzer::AnalysisOrchestrator;

pub use history::{FileHistoryStore, HistoryEntry, HistoryStore, MemoryHistoryStore};

pub use cli::CliHandler;
