use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::SenseiError;

/// Where the snippet under analysis came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SnippetSource {
    Stdin,
    File(PathBuf),
}

impl std::fmt::Display for SnippetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnippetSource::Stdin => write!(f, "stdin"),
            SnippetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A pasted or piped code snippet. No client-side language detection is
/// performed; the model infers the language itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub content: String,
    pub source: SnippetSource,
}

impl Snippet {
    pub fn new(content: String, source: SnippetSource) -> Self {
        Self { content, source }
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }

    /// Rough token estimate (~4 bytes per token) used as a pre-flight guard.
    pub fn estimated_tokens(&self) -> usize {
        self.content.len() / 4
    }

    pub fn validate(&self) -> Result<(), SenseiError> {
        if self.is_empty() {
            return Err(SenseiError::InvalidInput(
                "code snippet cannot be empty".to_string(),
            ));
        }
        if self.estimated_tokens() > 100_000 {
            return Err(SenseiError::TokenLimitExceeded);
        }
        Ok(())
    }
}
