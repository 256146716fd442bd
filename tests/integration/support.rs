use sensei::analyzer::{CompletionRequest, LlmProvider};
use sensei::SenseiError;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Fake provider that recognizes each prompt template by its header line and
/// returns a canned, schema-conformant response. Individual analyses can be
/// forced to fail, and an artificial per-call latency can be injected for
/// concurrency assertions.
pub struct ScriptedProvider {
    fail_headers: HashSet<&'static str>,
    malformed_headers: HashSet<&'static str>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn healthy() -> Self {
        Self {
            fail_headers: HashSet::new(),
            malformed_headers: HashSet::new(),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Force the analysis whose prompt starts with `header` to error.
    pub fn failing(header: &'static str) -> Self {
        let mut provider = Self::healthy();
        provider.fail_headers.insert(header);
        provider
    }

    /// Force the analysis whose prompt starts with `header` to return
    /// non-JSON garbage.
    pub fn malformed(header: &'static str) -> Self {
        let mut provider = Self::healthy();
        provider.malformed_headers.insert(header);
        provider
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn canned_response(prompt: &str) -> String {
        if prompt.starts_with("CODE SUMMARY") {
            r#"{"summary": "Computes the factorial of n recursively."}"#.to_string()
        } else if prompt.starts_with("LINE-BY-LINE EXPLANATION") {
            r#"{"explanation": [
                {"lines": "1", "code": "function factorial(n) {", "explanation": "Declares the function."},
                {"lines": "2", "code": "return n <= 1 ? 1 : n * factorial(n - 1);", "explanation": "Base case and recursive step."}
            ]}"#
            .to_string()
        } else if prompt.starts_with("COMPLEXITY ANALYSIS") {
            r#"{"timeComplexity": "O(n)", "spaceComplexity": "O(n)", "justification": "One recursive call per decrement, call stack depth n."}"#.to_string()
        } else if prompt.starts_with("ALTERNATIVE APPROACHES") {
            r#"{"alternatives": [{
                "approach": "Iterative",
                "codeSnippet": "let acc = 1; for (let i = 2; i <= n; i++) acc *= i;",
                "explanation": "Accumulates the product in a loop.",
                "pros": "No recursion depth limit.",
                "cons": "Slightly more state to track.",
                "timeComplexity": "O(n)",
                "spaceComplexity": "O(1)"
            }]}"#
            .to_string()
        } else if prompt.starts_with("PRACTICE PROBLEMS") {
            r#"{"problems": [
                {"title": "Factorial Trailing Zeroes", "link": "https://leetcode.com/problems/factorial-trailing-zeroes"},
                {"title": "Pow(x, n)", "link": "https://leetcode.com/problems/powx-n"}
            ]}"#
            .to_string()
        } else if prompt.starts_with("TOPIC IDENTIFICATION") {
            r#"{"topics": ["Recursion", "Mathematics"]}"#.to_string()
        } else if prompt.starts_with("FOLLOW-UP QUESTION") {
            "The recursion terminates because `n` strictly decreases toward the base case."
                .to_string()
        } else {
            panic!("unrecognized prompt: {}", prompt.lines().next().unwrap_or(""));
        }
    }
}

impl LlmProvider for ScriptedProvider {
    fn complete<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, SenseiError>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let header = request
            .prompt
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();
        let should_fail = self.fail_headers.iter().any(|h| header.starts_with(h));
        let is_malformed = self.malformed_headers.iter().any(|h| header.starts_with(h));
        let response = if should_fail || is_malformed {
            String::new()
        } else {
            Self::canned_response(&request.prompt)
        };
        let delay = self.delay;

        Box::pin(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if should_fail {
                return Err(SenseiError::LlmClientError("scripted failure".to_string()));
            }
            if is_malformed {
                return Ok("<html>definitely not json</html>".to_string());
            }
            Ok(response)
        })
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(5)
    }
}
