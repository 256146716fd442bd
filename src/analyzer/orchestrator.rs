use crate::analyzer::llm_client::{create_llm_client, CompletionRequest, LlmProvider};
use crate::analyzer::parse::{self, StructuredOutput};
use crate::analyzer::prompts::PromptTemplate;
use crate::error::SenseiError;
use crate::models::{
    AlternativeList, AnalysisKind, AnalysisReport, AnalysisRequest, CodeSummary, ComplexityReport,
    LineExplanation, PracticeProblemList, SlotFailure, TopicList,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::{timeout, Duration};

/// Fans one code snippet out to the six analyzers concurrently and collects
/// whichever succeed. Partial analyzer failure is never an orchestrator-level
/// error; only an invalid snippet is.
pub struct AnalysisOrchestrator {
    llm_client: Arc<dyn LlmProvider + Send + Sync>,
    default_timeout: Duration,
}

impl AnalysisOrchestrator {
    pub fn new(
        model: &str,
        api_key: Option<String>,
        timeout_seconds: u64,
    ) -> Result<Self, SenseiError> {
        let client = create_llm_client(model, api_key, timeout_seconds)?;

        Ok(Self {
            llm_client: client.into(),
            default_timeout: Duration::from_secs(timeout_seconds),
        })
    }

    /// Construct around an existing provider. This is the injection seam the
    /// tests use to script analyzer outcomes.
    pub fn with_client(
        client: Arc<dyn LlmProvider + Send + Sync>,
        timeout_seconds: u64,
    ) -> Self {
        Self {
            llm_client: client,
            default_timeout: Duration::from_secs(timeout_seconds),
        }
    }

    /// Run all six analyses over the same snippet. Settle-all join: every
    /// analyzer reaches a terminal state before the report is assembled, and
    /// a failed analyzer degrades to an absent slot plus a diagnostic entry.
    pub async fn analyze(&self, code: &str) -> Result<AnalysisReport, SenseiError> {
        if code.trim().is_empty() {
            return Err(SenseiError::InvalidInput(
                "code snippet cannot be empty".to_string(),
            ));
        }
        if code.len() / 4 > 100_000 {
            return Err(SenseiError::TokenLimitExceeded);
        }

        let started = Instant::now();

        let (summary, explanation, complexity, alternatives, practice_problems, topics) = futures::join!(
            self.execute_analysis::<CodeSummary>(AnalysisKind::Summary, code),
            self.execute_analysis::<LineExplanation>(AnalysisKind::Explanation, code),
            self.execute_analysis::<ComplexityReport>(AnalysisKind::Complexity, code),
            self.execute_analysis::<AlternativeList>(AnalysisKind::Alternatives, code),
            self.execute_analysis::<PracticeProblemList>(AnalysisKind::PracticeProblems, code),
            self.execute_analysis::<TopicList>(AnalysisKind::Topics, code),
        );

        let mut report = AnalysisReport::new(
            code.lines().count(),
            code.len(),
            self.llm_client.model_name().to_string(),
        );

        report.summary = settle(AnalysisKind::Summary, summary, &mut report.failures);
        report.explanation = settle(AnalysisKind::Explanation, explanation, &mut report.failures);
        report.complexity = settle(AnalysisKind::Complexity, complexity, &mut report.failures);
        report.alternatives = settle(
            AnalysisKind::Alternatives,
            alternatives,
            &mut report.failures,
        );
        report.practice_problems = settle(
            AnalysisKind::PracticeProblems,
            practice_problems,
            &mut report.failures,
        );
        report.topics = settle(AnalysisKind::Topics, topics, &mut report.failures);

        report.analysis_duration_ms = started.elapsed().as_millis() as u64;

        Ok(report)
    }

    /// Answer one follow-up question about the snippet. Stateless: only the
    /// original code and the single latest question are sent; the caller owns
    /// any conversation log.
    pub async fn answer_follow_up(
        &self,
        code: &str,
        question: &str,
    ) -> Result<String, SenseiError> {
        if code.trim().is_empty() {
            return Err(SenseiError::InvalidInput(
                "code context cannot be empty".to_string(),
            ));
        }
        if question.trim().is_empty() {
            return Err(SenseiError::InvalidInput(
                "question cannot be empty".to_string(),
            ));
        }

        let request = CompletionRequest::new(
            PromptTemplate::build_follow_up_system_prompt(),
            PromptTemplate::build_follow_up_prompt(code, question),
        );

        let answer = timeout(self.default_timeout, self.llm_client.complete(&request))
            .await
            .map_err(|_| {
                SenseiError::AnalysisUnavailable(format!(
                    "timed out after {} seconds",
                    self.default_timeout.as_secs()
                ))
            })?
            .map_err(|e| SenseiError::AnalysisUnavailable(e.to_string()))?;

        let answer = answer.trim().to_string();
        if answer.is_empty() {
            return Err(SenseiError::AnalysisUnavailable(
                "model returned an empty answer".to_string(),
            ));
        }

        Ok(answer)
    }

    async fn execute_analysis<T: StructuredOutput>(
        &self,
        kind: AnalysisKind,
        code: &str,
    ) -> Result<T, SenseiError> {
        let request = AnalysisRequest::new(kind, code);
        let completion = CompletionRequest::new(
            PromptTemplate::build_system_prompt(request.kind),
            PromptTemplate::build_analysis_prompt(request.kind, &request.code),
        );

        let raw = timeout(self.default_timeout, self.llm_client.complete(&completion))
            .await
            .map_err(|_| SenseiError::AnalysisTimeout {
                timeout: self.default_timeout.as_secs(),
            })??;

        parse::parse_slot::<T>(&raw)
    }

    pub fn model_info(&self) -> String {
        format!(
            "Model: {}, Timeout: {}s",
            self.llm_client.model_name(),
            self.default_timeout.as_secs()
        )
    }
}

/// Convert one analyzer outcome into slot presence. Failures are logged and
/// recorded for diagnostics, never propagated.
fn settle<T>(
    kind: AnalysisKind,
    outcome: Result<T, SenseiError>,
    failures: &mut Vec<SlotFailure>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(e) => {
            eprintln!("⚠️ {} analysis failed: {}", kind, e);
            failures.push(SlotFailure {
                kind,
                reason: e.to_string(),
            });
            None
        }
    }
}
