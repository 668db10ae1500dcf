use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("No API credential configured for the content service")]
    MissingCredential,

    #[error("Content service request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Content service returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Content service did not answer within {timeout:?}")]
    Timeout { timeout: std::time::Duration },

    #[error("Malformed content response: {message}")]
    MalformedResponse { message: String },

    #[error("Content response failed schema validation at '{path}': {reason}")]
    SchemaValidation { path: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 內容取得路徑上的四種失敗，全部由 ContentProvider 以 fallback 處理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentErrorKind {
    MissingCredential,
    TransportFailure,
    MalformedResponse,
    SchemaValidationFailure,
}

impl SiteError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaValidation {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns `None` for errors outside the content path (config, output IO).
    pub fn content_kind(&self) -> Option<ContentErrorKind> {
        match self {
            Self::MissingCredential => Some(ContentErrorKind::MissingCredential),
            Self::TransportError(_) | Self::UpstreamStatus { .. } | Self::Timeout { .. } => {
                Some(ContentErrorKind::TransportFailure)
            }
            Self::MalformedResponse { .. } | Self::SerializationError(_) => {
                Some(ContentErrorKind::MalformedResponse)
            }
            Self::SchemaValidation { .. } => Some(ContentErrorKind::SchemaValidationFailure),
            Self::IoError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                None
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("無法寫入輸出檔案: {}", e),
            Self::ConfigError { message } => format!("設定錯誤: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("設定值 '{}' 無效: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingCredential => "Set GEMINI_API_KEY or pass --api-key, or build with --offline",
            Self::TransportError(_) | Self::UpstreamStatus { .. } | Self::Timeout { .. } => {
                "Check network access and the content endpoint, or raise --timeout-seconds"
            }
            Self::MalformedResponse { .. } | Self::SerializationError(_) => {
                "Retry the build; the model occasionally returns non-JSON text"
            }
            Self::SchemaValidation { .. } => {
                "Retry the build or adjust the extraction prompt"
            }
            Self::IoError(_) => "Check that the output directory exists and is writable",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
