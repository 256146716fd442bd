pub mod analysis;
pub mod conversation;
pub mod snippet;

pub use analysis::{
    AlternativeApproach, AlternativeList, AnalysisKind, AnalysisReport, AnalysisRequest,
    CodeSummary, ComplexityReport, ExplainedChunk, LineExplanation, PracticeProblem,
    PracticeProblemList, SlotFailure, TopicList,
};
pub use conversation::{Conversation, FollowUpExchange};
pub use snippet::{Snippet, SnippetSource};
