use crate::dependency_tree::domain::GitHubRepository;
use crate::ports::outbound::DescriptionRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

type CachedLookup = Arc<OnceCell<std::result::Result<String, String>>>;

/// CachingDescriptionRepository wraps a DescriptionRepository with an
/// in-memory, per-repository cache.
///
/// Different versions and subpackages of one repository share a single
/// lookup. Concurrent callers asking for the same repository wait for the
/// first request instead of issuing their own. Failures are cached too, so
/// a failed repository is never requested twice in one run.
pub struct CachingDescriptionRepository<R: DescriptionRepository> {
    inner: R,
    cache: DashMap<GitHubRepository, CachedLookup>,
}

impl<R: DescriptionRepository> CachingDescriptionRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    #[cfg(test)]
    fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: DescriptionRepository> DescriptionRepository for CachingDescriptionRepository<R> {
    async fn fetch_description(&self, repository: &GitHubRepository) -> Result<String> {
        // The map guard must be released before awaiting.
        let cell = Arc::clone(&self.cache.entry(repository.clone()).or_default());

        let outcome = cell
            .get_or_init(|| async {
                self.inner
                    .fetch_description(repository)
                    .await
                    .map_err(|e| e.to_string())
            })
            .await;

        outcome.clone().map_err(anyhow::Error::msg)
    }
}
