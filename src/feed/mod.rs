pub mod github;

use async_trait::async_trait;
use std::num::NonZeroU32;
use std::sync::Arc;

use crate::config::ShowcaseConfig;
use crate::error::AppError;
use crate::showcase::{ShowcaseFeed, ShowcaseItem};

/// A remote listing of an account's repositories.
#[async_trait]
pub trait ListingSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn list(&self, owner: &str, limit: NonZeroU32)
        -> Result<Vec<ShowcaseItem>, ListingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("listing endpoint returned {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed listing response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid listing request: {0}")]
    InvalidRequest(String),
}

impl ListingError {
    /// Short label for the failure cause, recorded on fallback logs.
    pub fn cause(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
            Self::InvalidRequest(_) => "request",
        }
    }
}

/// Fetches up to `limit` items for `owner`, substituting the fallback set on
/// any failure. One request, no retry.
#[tracing::instrument(skip(source), fields(source = source.name()))]
pub async fn load_showcase_items(
    source: &dyn ListingSource,
    owner: &str,
    limit: NonZeroU32,
) -> ShowcaseFeed {
    let result = if owner.trim().is_empty() {
        Err(ListingError::InvalidRequest("owner is empty".to_string()))
    } else {
        source.list(owner, limit).await
    };

    match result {
        Ok(items) => {
            tracing::info!(count = items.len(), "loaded showcase items");
            ShowcaseFeed::live(items)
        }
        Err(e) => {
            tracing::warn!(error = %e, cause = e.cause(), "listing unavailable, using fallback");
            ShowcaseFeed::fallback()
        }
    }
}

/// The configured listing, shared with server functions through context.
#[derive(Clone)]
pub struct ShowcaseLoader {
    source: Arc<dyn ListingSource>,
    owner: String,
    limit: NonZeroU32,
}

impl ShowcaseLoader {
    pub fn new(source: Arc<dyn ListingSource>, owner: String, limit: NonZeroU32) -> Self {
        Self {
            source,
            owner,
            limit,
        }
    }

    /// Builds the GitHub-backed loader described by `config`.
    pub fn from_config(config: &ShowcaseConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().build()?;
        let source = github::GitHubListing::new(client, &config.api_base, config.token.clone())?;

        Ok(Self::new(
            Arc::new(source),
            config.owner.clone(),
            config.limit,
        ))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub async fn load(&self) -> ShowcaseFeed {
        load_showcase_items(self.source.as_ref(), &self.owner, self.limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::fallback_items;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Stub {
        Items(Vec<ShowcaseItem>),
        Unavailable,
    }

    struct StubSource {
        stub: Stub,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(stub: Stub) -> Self {
            Self {
                stub,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ListingSource for StubSource {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn list(
            &self,
            _owner: &str,
            _limit: NonZeroU32,
        ) -> Result<Vec<ShowcaseItem>, ListingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.stub {
                Stub::Items(items) => Ok(items.clone()),
                Stub::Unavailable => Err(ListingError::Status(
                    reqwest::StatusCode::SERVICE_UNAVAILABLE,
                )),
            }
        }
    }

    fn item(id: u64, name: &str) -> ShowcaseItem {
        ShowcaseItem {
            id,
            name: name.to_string(),
            description: None,
            url: format!("https://github.com/someone/{name}"),
            homepage: None,
            language: Some("Rust".to_string()),
            stars: 1,
            forks: 0,
            topics: vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()],
            updated_at: "2024-02-01T00:00:00Z".to_string(),
        }
    }

    fn six() -> NonZeroU32 {
        NonZeroU32::new(6).unwrap()
    }

    #[test]
    fn returns_live_items_untouched() {
        let items = vec![item(1, "x"), item(2, "y")];
        let source = StubSource::new(Stub::Items(items.clone()));

        let feed = tokio_test::block_on(load_showcase_items(&source, "someone", six()));

        assert!(!feed.used_fallback);
        assert_eq!(feed.items, items);
        // topics are only truncated when rendered
        assert_eq!(feed.items[0].topics.len(), 4);
    }

    #[test]
    fn substitutes_fallback_when_source_fails() {
        let source = StubSource::new(Stub::Unavailable);

        let feed = tokio_test::block_on(load_showcase_items(&source, "someone", six()));

        assert!(feed.used_fallback);
        assert_eq!(feed.items, fallback_items());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn repeated_failures_yield_identical_feeds() {
        let source = StubSource::new(Stub::Unavailable);

        let first = tokio_test::block_on(load_showcase_items(&source, "someone", six()));
        let second = tokio_test::block_on(load_showcase_items(&source, "someone", six()));

        assert_eq!(first, second);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn blank_owner_falls_back_without_calling_source() {
        let source = StubSource::new(Stub::Items(vec![item(1, "x")]));

        let feed = tokio_test::block_on(load_showcase_items(&source, "  ", six()));

        assert!(feed.used_fallback);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_listing_is_still_live() {
        let source = StubSource::new(Stub::Items(Vec::new()));

        let feed = tokio_test::block_on(load_showcase_items(&source, "someone", six()));

        assert!(!feed.used_fallback);
        assert!(feed.items.is_empty());
    }

    #[test]
    fn loader_delegates_to_its_source() {
        let source = Arc::new(StubSource::new(Stub::Items(vec![item(7, "z")])));
        let loader = ShowcaseLoader::new(source.clone(), "someone".to_string(), six());

        let feed = tokio_test::block_on(loader.load());

        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0].name, "z");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn builds_github_loader_from_config() {
        let config = ShowcaseConfig {
            owner: "someone".to_string(),
            ..ShowcaseConfig::default()
        };

        let loader = ShowcaseLoader::from_config(&config).unwrap();

        assert_eq!(loader.owner(), "someone");
        assert_eq!(loader.source.name(), "github");
    }

    #[test]
    fn rejects_config_with_bad_api_base() {
        let config = ShowcaseConfig {
            api_base: "::".to_string(),
            ..ShowcaseConfig::default()
        };

        assert!(matches!(
            ShowcaseLoader::from_config(&config),
            Err(AppError::Listing(ListingError::InvalidRequest(_)))
        ));
    }

    #[test]
    fn error_causes_are_distinct() {
        let status = ListingError::Status(reqwest::StatusCode::NOT_FOUND);
        let decode = ListingError::Decode(serde_json::from_str::<u8>("x").unwrap_err());
        let request = ListingError::InvalidRequest("bad".to_string());
        let network = ListingError::Network(
            reqwest::Client::new().get("not a url").build().unwrap_err(),
        );

        assert_eq!(status.cause(), "status");
        assert_eq!(decode.cause(), "decode");
        assert_eq!(request.cause(), "request");
        assert_eq!(network.cause(), "network");
    }
}
