use crate::support::ScriptedProvider;
use sensei::{AnalysisOrchestrator, SenseiError};
use std::sync::Arc;

const CODE: &str = "function factorial(n) { return n <= 1 ? 1 : n * factorial(n - 1); }";

#[tokio::test]
async fn follow_up_returns_a_non_empty_answer() {
    let provider = Arc::new(ScriptedProvider::healthy());
    let orchestrator = AnalysisOrchestrator::with_client(provider.clone(), 5);

    let answer = orchestrator
        .answer_follow_up(CODE, "Why does the recursion terminate?")
        .await
        .unwrap();

    assert!(!answer.trim().is_empty());
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn empty_question_fails_without_contacting_the_provider() {
    let provider = Arc::new(ScriptedProvider::healthy());
    let orchestrator = AnalysisOrchestrator::with_client(provider.clone(), 5);

    let result = orchestrator.answer_follow_up(CODE, "   ").await;

    assert!(matches!(result, Err(SenseiError::InvalidInput(_))));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn empty_code_context_fails_without_contacting_the_provider() {
    let provider = Arc::new(ScriptedProvider::healthy());
    let orchestrator = AnalysisOrchestrator::with_client(provider.clone(), 5);

    let result = orchestrator.answer_follow_up("", "What does this do?").await;

    assert!(matches!(result, Err(SenseiError::InvalidInput(_))));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn provider_failure_surfaces_as_analysis_unavailable() {
    let provider = Arc::new(ScriptedProvider::failing("FOLLOW-UP QUESTION"));
    let orchestrator = AnalysisOrchestrator::with_client(provider, 5);

    let result = orchestrator
        .answer_follow_up(CODE, "Is this tail recursive?")
        .await;

    assert!(matches!(result, Err(SenseiError::AnalysisUnavailable(_))));
}

#[tokio::test]
async fn each_follow_up_is_stateless() {
    let provider = Arc::new(ScriptedProvider::healthy());
    let orchestrator = AnalysisOrchestrator::with_client(provider.clone(), 5);

    orchestrator
        .answer_follow_up(CODE, "First question?")
        .await
        .unwrap();
    orchestrator
        .answer_follow_up(CODE, "Second question?")
        .await
        .unwrap();

    // One outbound request per question; no conversation replay
    assert_eq!(provider.call_count(), 2);
}
