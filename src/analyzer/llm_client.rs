use crate::error::SenseiError;
use rig::client::CompletionClient;
use rig::completion::{AssistantContent, CompletionModel};
use rig::providers::{anthropic, gemini, openai};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub model_name: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub max_tokens: Option<u64>,
    pub temperature: Option<f64>,
}

/// One outbound completion. Prompt construction and response parsing live
/// with the caller; the provider only moves text.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
        }
    }
}

pub trait LlmProvider: Send + Sync {
    fn complete<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, SenseiError>> + Send + 'a>>;
    fn model_name(&self) -> &str;
    fn timeout(&self) -> Duration;
}

pub struct RigLlmClient {
    config: LlmConfig,
    provider: RigProvider,
}

enum RigProvider {
    OpenAI(openai::Client),
    OpenAIResponses(openai::Client),
    Anthropic(anthropic::Client),
    Gemini(gemini::Client),
}

impl RigLlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, SenseiError> {
        let provider = create_provider(&config)?;
        Ok(Self { config, provider })
    }

    async fn make_api_request(&self, request: &CompletionRequest) -> Result<String, SenseiError> {
        match &self.provider {
            RigProvider::OpenAI(client) | RigProvider::OpenAIResponses(client) => {
                let model = client.completion_model(&self.config.model_name);
                self.send_completion_request(model, request).await
            }
            RigProvider::Anthropic(client) => {
                let model = client.completion_model(&self.config.model_name);
                self.send_completion_request(model, request).await
            }
            RigProvider::Gemini(client) => {
                let model = client.completion_model(&self.config.model_name);
                self.send_completion_request(model, request).await
            }
        }
    }

    async fn send_completion_request<M: CompletionModel>(
        &self,
        model: M,
        request: &CompletionRequest,
    ) -> Result<String, SenseiError> {
        let mut builder = model
            .completion_request(request.prompt.as_str())
            .preamble(request.system.clone());

        // Skip temperature for models that don't support it (GPT-5 and o1 series)
        if let Some(temp) = self.config.temperature {
            if !self.config.model_name.starts_with("gpt-5")
                && !self.config.model_name.starts_with("o1")
            {
                builder = builder.temperature(temp);
            }
        }

        if let Some(max_tokens) = self.config.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SenseiError::LlmClientError(format!("Request failed: {}", e)))?;

        let mut extracted_text = String::new();
        for content in response.choice.iter() {
            if let AssistantContent::Text(text_content) = content {
                extracted_text.push_str(&text_content.text);
            }
        }

        if extracted_text.trim().is_empty() {
            return Err(SenseiError::InvalidResponse(
                "model returned no text content".to_string(),
            ));
        }

        Ok(extracted_text)
    }
}

impl LlmProvider for RigLlmClient {
    fn complete<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, SenseiError>> + Send + 'a>> {
        Box::pin(async move { self.make_api_request(request).await })
    }

    fn model_name(&self) -> &str {
        &self.config.model_name
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }
}

fn create_provider(config: &LlmConfig) -> Result<RigProvider, SenseiError> {
    let model_name = config.model_name.trim();

    if is_openai_model(model_name) {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| SenseiError::LlmClientError("OpenAI API key not found".to_string()))?;

        let client = openai::Client::new(&api_key);

        // Newer models are served through the Responses API
        if model_name.starts_with("gpt-5") || model_name.starts_with("o") {
            Ok(RigProvider::OpenAIResponses(client))
        } else {
            Ok(RigProvider::OpenAI(client))
        }
    } else if is_claude_model(model_name) {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
            .ok_or_else(|| {
                SenseiError::LlmClientError("Anthropic API key not found".to_string())
            })?;

        let client = anthropic::ClientBuilder::new(&api_key).build();
        Ok(RigProvider::Anthropic(client))
    } else if is_gemini_model(model_name) {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or_else(|| SenseiError::LlmClientError("Gemini API key not found".to_string()))?;

        let client = gemini::Client::new(&api_key);
        Ok(RigProvider::Gemini(client))
    } else {
        Err(SenseiError::LlmClientError(format!(
            "Unsupported model '{}'. Use OpenAI (gpt-*), Anthropic (claude-*), or Gemini (gemini-*) models",
            model_name
        )))
    }
}

pub fn create_llm_client(
    model: &str,
    api_key: Option<String>,
    timeout_seconds: u64,
) -> Result<Box<dyn LlmProvider + Send + Sync>, SenseiError> {
    let config = LlmConfig {
        model_name: model.to_string(),
        api_key,
        timeout_seconds,
        max_tokens: Some(4000),
        temperature: Some(0.3),
    };

    let client = RigLlmClient::new(config)?;
    Ok(Box::new(client))
}

fn is_openai_model(model: &str) -> bool {
    let candidate = model.strip_prefix("openai/").unwrap_or(model);
    let candidate = candidate.strip_prefix("ft:").unwrap_or(candidate);

    candidate.starts_with("gpt-")
        || candidate.starts_with("chatgpt-")
        || candidate.starts_with("o1")
        || candidate.starts_with("o3")
        || candidate.starts_with("o4")
}

fn is_claude_model(model: &str) -> bool {
    let candidate = model.strip_prefix("anthropic/").unwrap_or(model);
    candidate.starts_with("claude-")
}

fn is_gemini_model(model: &str) -> bool {
    let candidate = model.strip_prefix("gemini/").unwrap_or(model);
    candidate.starts_with("gemini-")
}
