use serde::{Deserialize, Serialize};

/// One follow-up question and its answer. The answering call itself is
/// stateless; the conversation log lives entirely with the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpExchange {
    pub question: String,
    pub answer: String,
}

impl FollowUpExchange {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Append-only log of follow-up exchanges attached to one analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    exchanges: Vec<FollowUpExchange>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, exchange: FollowUpExchange) {
        self.exchanges.push(exchange);
    }

    pub fn exchanges(&self) -> &[FollowUpExchange] {
        &self.exchanges
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}
