use crate::core::presenter::render_document;
use crate::core::provider::ContentProvider;
use crate::core::Storage;
use crate::domain::model::PageOptions;
use crate::utils::error::Result;

pub const INDEX_FILE: &str = "index.html";
pub const PROFILE_FILE: &str = "profile.json";

/// Resolve → render → write, once per build.
pub struct SiteBuilder<S: Storage> {
    provider: ContentProvider,
    storage: S,
    options: PageOptions,
    write_profile: bool,
}

impl<S: Storage> SiteBuilder<S> {
    pub fn new(provider: ContentProvider, storage: S, options: PageOptions) -> Self {
        Self {
            provider,
            storage,
            options,
            write_profile: false,
        }
    }

    /// Also write the resolved record as `profile.json` next to the page.
    pub fn with_profile_snapshot(mut self, enabled: bool) -> Self {
        self.write_profile = enabled;
        self
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting site build");

        // 內容來源一定會得到一份 profile，失敗時已改用 fallback
        let profile = self.provider.resolve().await;
        tracing::info!(
            services = profile.services.len(),
            certifications = profile.certifications.len(),
            "Content resolved"
        );

        let document = render_document(&profile, &self.options);
        tracing::debug!("Rendered {} bytes of HTML", document.len());

        let output_path = self
            .storage
            .write_file(INDEX_FILE, document.as_bytes())
            .await?;

        if self.write_profile {
            let json = serde_json::to_string_pretty(&profile)?;
            let profile_path = self.storage.write_file(PROFILE_FILE, json.as_bytes()).await?;
            tracing::debug!("Profile snapshot saved to: {}", profile_path);
        }

        tracing::info!("Page saved to: {}", output_path);
        Ok(output_path)
    }
}
