use crate::core::gemini::{GeminiSettings, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_PROMPT};
use crate::domain::model::PageOptions;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use chrono::Datelike;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub content: ContentSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub name: String,
    pub tagline: String,
    pub language: String,
    pub stylesheet: Option<String>,
    /// 未設定時使用建置當年
    pub copyright_year: Option<i32>,
}

impl Default for SiteSection {
    fn default() -> Self {
        let page = PageOptions::default();
        Self {
            name: page.site_name,
            tagline: page.tagline,
            language: page.language,
            stylesheet: None,
            copyright_year: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    pub endpoint: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub api_key: Option<String>,
    pub prompt: Option<String>,
    pub search_grounding: bool,
    pub offline: bool,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: 20,
            api_key: None,
            prompt: None,
            search_grounding: true,
            offline: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub path: String,
    pub write_profile: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: "./dist".to_string(),
            write_profile: false,
        }
    }
}

fn env_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid placeholder regex"))
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEMINI_API_KEY})；找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            site_name: self.site.name.clone(),
            tagline: self.site.tagline.clone(),
            language: self.site.language.clone(),
            stylesheet: self.site.stylesheet.clone(),
            copyright_year: self
                .site
                .copyright_year
                .unwrap_or_else(|| chrono::Local::now().year()),
        }
    }

    /// The credential is passed in rather than read here; `main` decides
    /// between the flag, the environment and `content.api_key`.
    pub fn gemini_settings(&self, api_key: Option<String>) -> GeminiSettings {
        GeminiSettings {
            api_key: api_key.or_else(|| self.content.api_key.clone()),
            endpoint: self.content.endpoint.clone(),
            model: self.content.model.clone(),
            prompt: self
                .content
                .prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            search_grounding: self.content.search_grounding,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.content.timeout_seconds)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("content.endpoint", &self.content.endpoint)?;
        validation::validate_model_name("content.model", &self.content.model)?;
        validation::validate_range("content.timeout_seconds", self.content.timeout_seconds, 1, 300)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_non_empty_string("site.name", &self.site.name)?;

        if let Some(prompt) = &self.content.prompt {
            validation::validate_non_empty_string("content.prompt", prompt)?;
        }

        tracing::debug!("Site configuration validation passed");
        Ok(())
    }
}
