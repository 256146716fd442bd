use serde::de::DeserializeOwned;

use crate::error::SenseiError;
use crate::models::{
    AlternativeList, CodeSummary, ComplexityReport, LineExplanation, PracticeProblemList,
    TopicList,
};

/// A typed analyzer output that can vouch for its own shape after
/// deserialization. Schema conformance is all-or-nothing: a slot is either a
/// fully valid value or absent, never a partial shape.
pub trait StructuredOutput: DeserializeOwned {
    fn check(&self) -> Result<(), String>;
}

impl StructuredOutput for CodeSummary {
    fn check(&self) -> Result<(), String> {
        if self.summary.trim().is_empty() {
            return Err("summary text is empty".to_string());
        }
        Ok(())
    }
}

impl StructuredOutput for LineExplanation {
    fn check(&self) -> Result<(), String> {
        if self.explanation.is_empty() {
            return Err("explanation contains no segments".to_string());
        }
        for chunk in &self.explanation {
            if chunk.explanation.trim().is_empty() {
                return Err(format!("segment '{}' has no explanation text", chunk.lines));
            }
        }
        Ok(())
    }
}

impl StructuredOutput for ComplexityReport {
    fn check(&self) -> Result<(), String> {
        if self.time_complexity.trim().is_empty() || self.space_complexity.trim().is_empty() {
            return Err("complexity fields are empty".to_string());
        }
        Ok(())
    }
}

impl StructuredOutput for AlternativeList {
    fn check(&self) -> Result<(), String> {
        if self.alternatives.is_empty() {
            return Err("no alternative approaches returned".to_string());
        }
        Ok(())
    }
}

impl StructuredOutput for PracticeProblemList {
    fn check(&self) -> Result<(), String> {
        if self.problems.is_empty() {
            return Err("no practice problems returned".to_string());
        }
        Ok(())
    }
}

impl StructuredOutput for TopicList {
    fn check(&self) -> Result<(), String> {
        if self.topics.iter().all(|t| t.trim().is_empty()) {
            return Err("no topics returned".to_string());
        }
        Ok(())
    }
}

/// Parse raw model text into a typed slot value.
///
/// Models are instructed to return bare JSON, but in practice responses
/// arrive fenced, prefixed with prose, or both. The payload is located by
/// brace matching from the first `{` to the last `}`.
pub fn parse_slot<T: StructuredOutput>(raw: &str) -> Result<T, SenseiError> {
    let payload = extract_json_object(raw).ok_or_else(|| {
        SenseiError::InvalidResponse("no JSON object found in model output".to_string())
    })?;

    let value: T = serde_json::from_str(payload)
        .map_err(|e| SenseiError::InvalidResponse(format!("schema mismatch: {}", e)))?;

    value.check().map_err(SenseiError::InvalidResponse)?;

    Ok(value)
}

/// Extract the outermost JSON object substring from raw LLM output.
/// Returns None when no balanced object is present.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}
