use serde::{Deserialize, Serialize};

/// The six independent analyses performed per snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisKind {
    Summary,
    Explanation,
    Complexity,
    Alternatives,
    PracticeProblems,
    Topics,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 6] = [
        AnalysisKind::Summary,
        AnalysisKind::Explanation,
        AnalysisKind::Complexity,
        AnalysisKind::Alternatives,
        AnalysisKind::PracticeProblems,
        AnalysisKind::Topics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Summary => "summary",
            AnalysisKind::Explanation => "explanation",
            AnalysisKind::Complexity => "complexity",
            AnalysisKind::Alternatives => "alternatives",
            AnalysisKind::PracticeProblems => "practice_problems",
            AnalysisKind::Topics => "topics",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnalysisKind::Summary => "Concise summary of the code functionality",
            AnalysisKind::Explanation => "Chunk-by-chunk walkthrough of the code",
            AnalysisKind::Complexity => "Time and space complexity analysis",
            AnalysisKind::Alternatives => "Alternative approaches with trade-offs",
            AnalysisKind::PracticeProblems => "Related practice problems",
            AnalysisKind::Topics => "Computer science topics covered",
        }
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of work handed to an analyzer adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub kind: AnalysisKind,
    pub code: String,
}

impl AnalysisRequest {
    pub fn new(kind: AnalysisKind, code: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code.trim().is_empty()
    }

    pub fn content_size(&self) -> usize {
        self.code.len()
    }
}

/// Output shape of the summary analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSummary {
    pub summary: String,
}

/// One logical segment of the line-by-line walkthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainedChunk {
    /// Line range this segment covers, e.g. "1-3" or "5".
    pub lines: String,
    pub code: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineExplanation {
    pub explanation: Vec<ExplainedChunk>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityReport {
    pub time_complexity: String,
    pub space_complexity: String,
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeApproach {
    /// Name of the approach, e.g. "Brute Force", "Optimal".
    pub approach: String,
    pub code_snippet: String,
    pub explanation: String,
    pub pros: String,
    pub cons: String,
    pub time_complexity: String,
    pub space_complexity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeList {
    pub alternatives: Vec<AlternativeApproach>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeProblem {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeProblemList {
    pub problems: Vec<PracticeProblem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicList {
    pub topics: Vec<String>,
}

/// Diagnostic record of a failed analyzer slot. Never fatal to the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotFailure {
    pub kind: AnalysisKind,
    pub reason: String,
}

/// Aggregate result of one `analyze` call. Each slot is present only if the
/// corresponding analyzer succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub snippet_lines: usize,
    pub snippet_bytes: usize,
    pub model_used: String,
    pub analysis_duration_ms: u64,
    pub summary: Option<CodeSummary>,
    pub explanation: Option<LineExplanation>,
    pub complexity: Option<ComplexityReport>,
    pub alternatives: Option<AlternativeList>,
    pub practice_problems: Option<PracticeProblemList>,
    pub topics: Option<TopicList>,
    pub failures: Vec<SlotFailure>,
}

impl AnalysisReport {
    pub fn new(snippet_lines: usize, snippet_bytes: usize, model_used: String) -> Self {
        Self {
            snippet_lines,
            snippet_bytes,
            model_used,
            analysis_duration_ms: 0,
            summary: None,
            explanation: None,
            complexity: None,
            alternatives: None,
            practice_problems: None,
            topics: None,
            failures: Vec::new(),
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.analysis_duration_ms = duration_ms;
        self
    }

    /// Number of populated slots, out of six.
    pub fn slot_count(&self) -> usize {
        [
            self.summary.is_some(),
            self.explanation.is_some(),
            self.complexity.is_some(),
            self.alternatives.is_some(),
            self.practice_problems.is_some(),
            self.topics.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    pub fn is_complete(&self) -> bool {
        self.slot_count() == AnalysisKind::ALL.len()
    }

    /// True when every analyzer failed and there is nothing to render.
    pub fn is_empty_report(&self) -> bool {
        self.slot_count() == 0
    }

    pub fn record_failure(&mut self, kind: AnalysisKind, reason: String) {
        self.failures.push(SlotFailure { kind, reason });
    }

    /// Short title for history listings: the first summary line, or a
    /// generic label when the summary slot is absent.
    pub fn headline(&self) -> String {
        self.summary
            .as_ref()
            .and_then(|s| s.summary.lines().next())
            .map(|line| {
                let line = line.trim();
                if line.chars().count() > 80 {
                    let truncated: String = line.chars().take(77).collect();
                    format!("{}...", truncated)
                } else {
                    line.to_string()
                }
            })
            .filter(|line| !line.is_empty())
            .unwrap_or_else(|| "Code Snippet".to_string())
    }
}
