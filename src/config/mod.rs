pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::SiteConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "consola-site")]
#[command(about = "Builds the Consola Menuiserie single-page site")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the page is written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Content service credential (otherwise GEMINI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Skip the content service and build from the fallback record
    #[arg(long)]
    pub offline: bool,

    #[arg(long)]
    pub no_search_grounding: bool,

    /// Also write the resolved content as profile.json
    #[arg(long)]
    pub write_profile: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋 TOML 設定
    pub fn apply_overrides(&self, config: &mut SiteConfig) {
        if let Some(path) = &self.output_path {
            config.output.path = path.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.content.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            config.content.model = model.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.content.timeout_seconds = timeout;
        }
        if self.offline {
            config.content.offline = true;
        }
        if self.no_search_grounding {
            config.content.search_grounding = false;
        }
        if self.write_profile {
            config.output.write_profile = true;
        }
    }

    pub fn load_site_config(&self) -> crate::Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }
}
