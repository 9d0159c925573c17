// Chat-completion client for remote content generation

use super::error::{GenerationError, OrchestratorError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub response_format: ResponseFormat,
}

impl CompletionRequest {
    /// Single system-message request asking for a JSON object back
    pub fn json_instruction(
        model: impl Into<String>,
        instruction: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message {
                role: "system".to_string(),
                content: instruction.into(),
            }],
            temperature,
            max_tokens,
            response_format: ResponseFormat::json_object(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResponseFormat {
    pub fn json_object() -> Self {
        Self {
            kind: "json_object".to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extract the first choice's message content from a raw response body
fn first_choice_content(body: &str) -> Result<String, GenerationError> {
    let response: ChatResponse = serde_json::from_str(body)?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            GenerationError::MalformedResponse("response has no message content".to_string())
        })
}

/// Something that can answer a completion request
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send one request and return the content of the first choice
    async fn complete(
        &self,
        request: &CompletionRequest,
        credential: &str,
    ) -> Result<String, GenerationError>;
}

/// Chat-completion API client over HTTPS
pub struct ChatCompletionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ChatCompletionClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, OrchestratorError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Use an already configured reqwest client
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionBackend for ChatCompletionClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
        credential: &str,
    ) -> Result<String, GenerationError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            max_tokens = request.max_tokens,
            "Sending completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::TransportFailure(format!(
                "API request failed with status {}",
                status
            )));
        }

        let body = response.text().await?;
        first_choice_content(&body)
    }
}
