//! Live adapter for the `CompletionEstimator` port using a chat-completions
//! style estimation gateway.

use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::analysis::{CompletionAnalysis, EstimateRequest};
use crate::ports::estimator::{BoxError, CompletionEstimator, EstimateFuture};

/// Environment variable holding the bearer key for the estimation gateway.
pub const API_KEY_VAR: &str = "ESTIMATOR_API_KEY";

const SYSTEM_PROMPT: &str = "You are an AI that analyzes GitHub issues and predicts outcomes. \
                             Always respond with valid JSON only.";

/// Estimator that POSTs to an OpenAI-compatible chat-completions endpoint.
///
/// The gateway is expected to return a JSON object matching
/// [`CompletionAnalysis`] as the message content. Every failure mode
/// (missing key, network error, non-success status, a hung service hitting
/// the timeout, unparseable content) surfaces as an `Err` so the caller can
/// degrade to the fallback analysis.
pub struct HttpEstimator {
    client: Client,
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl HttpEstimator {
    /// Creates an estimator targeting `endpoint` with the given model name
    /// and per-request timeout.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            timeout,
        }
    }
}

/// Request body sent to the chat-completions endpoint.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat<'a>,
}

/// A single message in the chat-completions request.
#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response-format hint asking the model for a JSON object.
#[derive(Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

/// Top-level response from the chat-completions endpoint.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

/// One completion choice in the response.
#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

/// The message inside a completion choice.
#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl CompletionEstimator for HttpEstimator {
    fn estimate(&self, request: &EstimateRequest) -> EstimateFuture<'_> {
        let prompt = request.prompt();

        Box::pin(async move {
            let api_key = env::var(API_KEY_VAR)
                .map_err(|_| -> BoxError { format!("{API_KEY_VAR} not configured").into() })?;

            let body = ChatRequest {
                model: &self.model,
                messages: vec![
                    ChatMessage { role: "system", content: SYSTEM_PROMPT },
                    ChatMessage { role: "user", content: &prompt },
                ],
                response_format: ResponseFormat { kind: "json_object" },
            };

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&api_key)
                .timeout(self.timeout)
                .json(&body)
                .send()
                .await
                .map_err(|e| -> BoxError { format!("estimator request failed: {e}").into() })?;

            let status = response.status();
            let response_text = response
                .text()
                .await
                .map_err(|e| -> BoxError { format!("failed to read estimator response: {e}").into() })?;

            if !status.is_success() {
                return Err(format!("estimator error ({}): {response_text}", status.as_u16()).into());
            }

            let chat: ChatResponse = serde_json::from_str(&response_text)
                .map_err(|e| -> BoxError { format!("failed to parse estimator response: {e}").into() })?;

            let content = chat
                .choices
                .first()
                .map(|choice| choice.message.content.as_str())
                .ok_or("estimator response contained no choices")?;

            let analysis: CompletionAnalysis = serde_json::from_str(content).map_err(
                |e| -> BoxError { format!("estimator returned malformed analysis: {e}").into() },
            )?;

            if analysis.completion_probability > 100 {
                return Err(format!(
                    "estimator returned out-of-range probability: {}",
                    analysis.completion_probability
                )
                .into());
            }

            Ok(analysis)
        })
    }
}
