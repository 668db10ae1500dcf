pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::SiteConfig};
pub use core::{
    gemini::{GeminiSettings, GeminiSource},
    presenter::{render_document, render_page},
    provider::{resolve_or_default, ContentProvider, StaticSource},
    site::SiteBuilder,
};
pub use domain::{fallback::fallback_profile, model::BusinessProfile};
pub use utils::error::{ContentErrorKind, Result, SiteError};
