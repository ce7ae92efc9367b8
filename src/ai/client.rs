use crate::error::ServiceError;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// One structured prompt: instructions, the user-specific part, and the
/// schema the reply must conform to.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub response_schema: Option<Value>,
    pub label: &'static str,
}

/// A hosted text-generation model that answers with JSON text.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ServiceError>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: GEMINI_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    #[cfg(test)]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ServiceError> {
        let url = format!("{}/{}:generateContent", self.endpoint, self.model);
        log::info!("🤖 [{}] calling {}", request.label, self.model);

        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_payload(request))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            log::error!("[{}] API Error {status}: {body}", request.label);
            return Err(ServiceError::Api { status, body });
        }

        let body: Value = res.json().await?;
        let text = extract_text(&body).ok_or(ServiceError::EmptyResponse)?;
        Ok(clean_json_block(text))
    }
}

fn build_payload(request: &GenerationRequest) -> Value {
    let full_prompt = format!("{}\n\n{}", request.system_prompt.trim(), request.user_prompt);

    let mut payload = json!({
        "contents": [{
            "parts": [{ "text": full_prompt }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json"
        }
    });

    if let Some(schema) = &request.response_schema {
        payload["generationConfig"]["responseSchema"] = schema.clone();
    }
    payload
}

fn extract_text(body: &Value) -> Option<&str> {
    body["candidates"][0]["content"]["parts"][0]["text"].as_str()
}

/// Strips a ```json fence if the model wrapped its answer in one.
fn clean_json_block(text: &str) -> String {
    let trimmed = text.trim();
    let Some(fenced) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    let fenced = fenced.strip_prefix("json").unwrap_or(fenced);
    fenced.strip_suffix("```").unwrap_or(fenced).trim().to_string()
}
