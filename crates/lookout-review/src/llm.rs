use std::time::Duration;

use lookout_core::LookoutError;
use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// One message in the chat request sent to the LLM.
///
/// Lookout only ever sends two: the configured system role followed by the
/// rendered user prompt.
///
/// # Examples
///
/// ```
/// use lookout_review::llm::{ChatMessage, Role};
///
/// let msg = ChatMessage {
///     role: Role::User,
///     content: "Summarize this diff".into(),
/// };
/// assert_eq!(serde_json::to_value(&msg).unwrap()["role"], "user");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Who the message is attributed to.
    pub role: Role,
    /// The message text.
    pub content: String,
}

/// Chat message role, serialized lowercase as the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Standing instructions for the model.
    System,
    /// The prompt being answered.
    User,
    /// A model reply.
    Assistant,
}

/// OpenAI-compatible chat completions client.
///
/// Works with any provider that exposes the `/v1/chat/completions` endpoint;
/// the endpoint is overridable through `OPENAI_API_ENDPOINT` for proxies and
/// self-hosted gateways.
pub struct LlmClient {
    client: reqwest::Client,
    api_key: String,
    endpoint: Option<String>,
}

impl LlmClient {
    /// Create a client from `OPENAI_API_KEY` and the optional
    /// `OPENAI_API_ENDPOINT` override. Performs no network activity, so the
    /// missing-key precondition fails before anything is sent anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`LookoutError::Config`] if `OPENAI_API_KEY` is not set, or
    /// [`LookoutError::Llm`] if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, LookoutError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            LookoutError::Config("OPENAI_API_KEY environment variable is not set".into())
        })?;
        let endpoint = std::env::var("OPENAI_API_ENDPOINT")
            .ok()
            .filter(|v| !v.is_empty());
        Self::new(api_key, endpoint)
    }

    /// Create a client from an explicit key and endpoint override.
    ///
    /// # Errors
    ///
    /// Returns [`LookoutError::Llm`] if the HTTP client cannot be built.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookout_review::llm::LlmClient;
    ///
    /// let client = LlmClient::new("test-key".into(), None).unwrap();
    /// ```
    pub fn new(api_key: String, endpoint: Option<String>) -> Result<Self, LookoutError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| LookoutError::Llm(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key,
            endpoint,
        })
    }

    /// Send a chat completion request and return the text response.
    ///
    /// # Errors
    ///
    /// Returns [`LookoutError::Llm`] on HTTP errors or response parsing
    /// failures. When a custom endpoint is configured, it is appended to the
    /// error message so misconfigured proxies are obvious from CI logs.
    pub async fn chat(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LookoutError> {
        let base = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        let url = format!("{base}/v1/chat/completions");

        let body = serde_json::json!({
            "model": model,
            "messages": messages,
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.llm_error(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(self.llm_error(format!("LLM API error {status}: {body_text}")));
        }

        let response_body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| self.llm_error(format!("failed to parse response: {e}")))?;

        let content = response_body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                self.llm_error(format!("unexpected response structure: {response_body}"))
            })?;

        Ok(content.to_string())
    }

    fn llm_error(&self, message: String) -> LookoutError {
        match &self.endpoint {
            Some(endpoint) => {
                LookoutError::Llm(format!("{message} (custom endpoint: {endpoint})"))
            }
            None => LookoutError::Llm(message),
        }
    }
}
