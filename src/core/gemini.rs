use crate::core::schema::business_profile_schema;
use crate::domain::model::BusinessProfile;
use crate::domain::ports::ContentSource;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_PROMPT: &str = "Analyse le site https://www.consolamenuiserie.fr/ et extrais les informations clés : histoire (depuis quand ?), services principaux (bois, alu, pvc, monuments historiques), certifications (RGE, Qualibat), et valeurs de l'entreprise.";

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub prompt: String,
    pub search_grounding: bool,
}

impl GeminiSettings {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            search_grounding: true,
        }
    }

    /// Blank keys and unresolved `${VAR}` placeholders do not count.
    fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !(key.starts_with("${") && key.ends_with('}')))
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// Asks the Gemini `generateContent` API to summarize the business into a
/// `BusinessProfile`, constrained by the declarative response schema.
pub struct GeminiSource {
    settings: GeminiSettings,
    client: Client,
}

impl GeminiSource {
    pub fn new(settings: GeminiSettings) -> Self {
        Self::with_client(settings, Client::new())
    }

    pub fn with_client(settings: GeminiSettings, client: Client) -> Self {
        Self { settings, client }
    }

    pub fn request_body(&self) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": self.settings.prompt }],
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": business_profile_schema().to_response_schema(),
            },
        });

        if self.settings.search_grounding {
            body["tools"] = json!([{ "google_search": {} }]);
        }

        body
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// 取出第一個候選回應的所有文字片段
fn response_text(raw: &str) -> Result<String> {
    let envelope: GenerateContentResponse = serde_json::from_str(raw)
        .map_err(|e| SiteError::malformed(format!("invalid response envelope: {}", e)))?;

    let text: String = envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(SiteError::malformed("response contains no text"));
    }
    Ok(text)
}

/// Grounded answers sometimes arrive wrapped in a Markdown code fence.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // 去掉語言標記 (```json)
    match body.split_once('\n') {
        Some((lang, inner)) if !lang.trim().contains(|c: char| c == '{' || c == '[') => inner.trim(),
        _ => body.trim(),
    }
}

/// Parses the model's text answer into a validated profile. Nothing is
/// accepted unless the whole document matches the schema.
pub fn parse_profile(text: &str) -> Result<BusinessProfile> {
    let value: Value = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| SiteError::malformed(format!("response text is not JSON: {}", e)))?;

    business_profile_schema().validate(&value)?;

    Ok(serde_json::from_value(value)?)
}

#[async_trait]
impl ContentSource for GeminiSource {
    async fn fetch(&self) -> Result<BusinessProfile> {
        let api_key = self
            .settings
            .credential()
            .ok_or(SiteError::MissingCredential)?;

        let url = self.settings.generate_url();
        tracing::debug!("Requesting content extraction from: {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&self.request_body())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Content service response status: {}", status);

        let raw = response.text().await?;
        if !status.is_success() {
            return Err(SiteError::UpstreamStatus {
                status: status.as_u16(),
                body: raw.chars().take(200).collect(),
            });
        }

        parse_profile(&response_text(&raw)?)
    }

    fn describe(&self) -> String {
        format!("gemini:{}", self.settings.model)
    }
}
