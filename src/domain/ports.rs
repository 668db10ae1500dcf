use crate::domain::model::BusinessProfile;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Somewhere a `BusinessProfile` can come from. Implementations report every
/// failure; collapsing to the fallback happens in `ContentProvider`.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self) -> Result<BusinessProfile>;

    fn describe(&self) -> String;
}
