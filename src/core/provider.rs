use crate::domain::fallback::fallback_profile;
use crate::domain::model::BusinessProfile;
use crate::domain::ports::ContentSource;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Collapses a content attempt into a guaranteed profile: `Ok` passes through,
/// any error is logged and replaced by a copy of `fallback`.
pub async fn resolve_or_default<F>(attempt: F, fallback: &BusinessProfile) -> BusinessProfile
where
    F: Future<Output = Result<BusinessProfile>>,
{
    match attempt.await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(
                kind = ?e.content_kind(),
                "Content resolution failed, using fallback: {}",
                e
            );
            fallback.clone()
        }
    }
}

/// Always yields the same profile. Used for offline builds.
#[derive(Debug, Clone)]
pub struct StaticSource {
    profile: BusinessProfile,
}

impl StaticSource {
    pub fn new(profile: BusinessProfile) -> Self {
        Self { profile }
    }
}

impl Default for StaticSource {
    fn default() -> Self {
        Self::new(fallback_profile())
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    async fn fetch(&self) -> Result<BusinessProfile> {
        Ok(self.profile.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

pub struct ContentProvider {
    source: Box<dyn ContentSource>,
    fallback: BusinessProfile,
    timeout: Duration,
}

impl ContentProvider {
    pub fn new(source: Box<dyn ContentSource>) -> Self {
        Self {
            source,
            fallback: fallback_profile(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn fallback(&self) -> &BusinessProfile {
        &self.fallback
    }

    /// One bounded attempt against the source; expiry counts as a transport failure.
    pub async fn fetch(&self) -> Result<BusinessProfile> {
        match tokio::time::timeout(self.timeout, self.source.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(SiteError::Timeout {
                timeout: self.timeout,
            }),
        }
    }

    pub async fn resolve(&self) -> BusinessProfile {
        tracing::info!("Resolving site content from {}", self.source.describe());
        resolve_or_default(self.fetch(), &self.fallback).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Contact, History};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FailingSource {
        error: fn() -> SiteError,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ContentSource for FailingSource {
        async fn fetch(&self) -> Result<BusinessProfile> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    struct SlowSource;

    #[async_trait]
    impl ContentSource for SlowSource {
        async fn fetch(&self) -> Result<BusinessProfile> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(sample_profile())
        }

        fn describe(&self) -> String {
            "slow".to_string()
        }
    }

    fn sample_profile() -> BusinessProfile {
        BusinessProfile {
            history: History {
                founded: "2001".to_string(),
                description: "Jeune atelier".to_string(),
            },
            services: vec![],
            certifications: vec!["RGE".to_string()],
            values: vec![],
            contact: Contact {
                address: "Quai, Brest".to_string(),
                phone: "02".to_string(),
                email: "x@y.fr".to_string(),
                hours: String::new(),
            },
        }
    }

    #[tokio::test]
    async fn test_resolve_or_default_passes_success_through() {
        let resolved =
            resolve_or_default(async { Ok(sample_profile()) }, &fallback_profile()).await;
        assert_eq!(resolved, sample_profile());
    }

    #[tokio::test]
    async fn test_every_error_kind_falls_back() {
        let errors: Vec<fn() -> SiteError> = vec![
            || SiteError::MissingCredential,
            || SiteError::UpstreamStatus {
                status: 500,
                body: String::new(),
            },
            || SiteError::malformed("garbage"),
            || SiteError::schema("$.contact.email", "required field is missing"),
        ];

        for error in errors {
            let calls = Arc::new(AtomicUsize::new(0));
            let provider = ContentProvider::new(Box::new(FailingSource {
                error,
                calls: calls.clone(),
            }));

            assert_eq!(provider.resolve().await, fallback_profile());
            assert_eq!(calls.load(Ordering::SeqCst), 1, "no retries expected");
        }
    }

    #[tokio::test]
    async fn test_static_source_resolves_to_its_profile() {
        let provider = ContentProvider::new(Box::new(StaticSource::new(sample_profile())));
        assert_eq!(provider.resolve().await, sample_profile());
    }

    #[tokio::test]
    async fn test_slow_source_times_out_to_fallback() {
        let provider =
            ContentProvider::new(Box::new(SlowSource)).with_timeout(Duration::from_millis(50));

        let err = provider.fetch().await.unwrap_err();
        assert!(matches!(err, SiteError::Timeout { .. }));
        assert_eq!(provider.resolve().await, *provider.fallback());
    }
}
