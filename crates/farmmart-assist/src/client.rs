//! Generative-language model client.

use crate::AssistError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// System instruction keeping the assistant on farming topics.
pub const FARMING_SYSTEM_PROMPT: &str = "You are an expert farming assistant. Your role is to provide accurate, helpful, and practical advice about farming, agriculture, and related topics. \nFocus on:\n- Crop management and best practices\n- Soil health and fertilization\n- Pest control and disease prevention\n- Weather impact on farming\n- Sustainable farming methods\n- Modern farming techniques\n- Equipment and tools\n- Market trends and crop selection\n\nAlways provide practical, actionable advice and explain your reasoning. If you're not sure about something, say so.";

/// Instruction sent alongside an uploaded crop photo.
const DIAGNOSIS_PROMPT: &str = "You are a plant pathologist. Examine this crop photo and identify the most likely disease, describe the visible symptoms, and recommend a practical treatment. If the plant appears healthy, say so plainly.";

/// The assistant operations the server depends on.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Free-text farming chat. Returns the model's text verbatim.
    async fn chat(&self, message: &str) -> Result<String, AssistError>;

    /// Diagnose a crop photo. Returns the model's text verbatim.
    async fn diagnose(&self, image: &[u8], mime_type: &str) -> Result<String, AssistError>;
}

/// Client for a `generateContent`-style model endpoint.
pub struct AssistantClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl AssistantClient {
    /// Create a client with the given API key and default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the API base URL.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn generate(&self, parts: Vec<Part>) -> Result<String, AssistError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.api_base, self.model
        );
        let body = GenerateRequest::new(parts);

        let response = self
            .http
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AssistError::Http {
                status: status.as_u16(),
                message: truncate(&message, 512),
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AssistError::Parse(e.to_string()))?;

        parsed.first_text().ok_or(AssistError::EmptyResponse)
    }
}

#[async_trait]
impl Assistant for AssistantClient {
    async fn chat(&self, message: &str) -> Result<String, AssistError> {
        let prompt = format!("{FARMING_SYSTEM_PROMPT}\n\nUser: {message}\n\nAssistant:");
        self.generate(vec![Part::text(prompt)]).await
    }

    async fn diagnose(&self, image: &[u8], mime_type: &str) -> Result<String, AssistError> {
        self.generate(vec![
            Part::text(DIAGNOSIS_PROMPT),
            Part::inline_image(image, mime_type),
        ])
        .await
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s[..end].to_string()
    }
}

// --- Wire types ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

impl GenerateRequest {
    fn new(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
            generation_config: GenerationConfig::default(),
            safety_settings: SafetySetting::defaults(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline_image(bytes: &[u8], mime_type: &str) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data: BASE64.encode(bytes),
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: i64,
    top_p: f64,
    max_output_tokens: i64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

impl SafetySetting {
    fn defaults() -> Vec<Self> {
        const CATEGORIES: [&str; 4] = [
            "HARM_CATEGORY_HARASSMENT",
            "HARM_CATEGORY_HATE_SPEECH",
            "HARM_CATEGORY_SEXUALLY_EXPLICIT",
            "HARM_CATEGORY_DANGEROUS_CONTENT",
        ];
        CATEGORIES
            .into_iter()
            .map(|category| Self {
                category,
                threshold: "BLOCK_MEDIUM_AND_ABOVE",
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// The first text part of the first candidate, if any.
    fn first_text(&self) -> Option<String> {
        self.candidates
            .iter()
            .flat_map(|c| c.content.parts.iter())
            .find_map(|p| p.text.clone())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
