use crate::dependency_tree::domain::Descriptions;
use crate::ports::outbound::DescriptionRepository;
use dashmap::DashMap;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Result of one enrichment pass
#[derive(Debug, Clone, Default)]
pub struct EnrichmentOutcome {
    /// One entry per requested identifier; failures hold a parenthesized reason
    pub descriptions: Descriptions,
    pub succeeded: usize,
    pub failed: usize,
}

/// EnrichDescriptionsUseCase - Fetches descriptions for a set of modules
///
/// Launches one lookup per identifier and waits for all of them. A failed
/// lookup never aborts the pass; its error message becomes the description,
/// wrapped in parentheses.
///
/// # Type Parameters
/// * `R` - DescriptionRepository implementation
pub struct EnrichDescriptionsUseCase<R: DescriptionRepository> {
    description_repository: R,
}

impl<R: DescriptionRepository> EnrichDescriptionsUseCase<R> {
    pub fn new(description_repository: R) -> Self {
        Self {
            description_repository,
        }
    }

    /// Looks up every identifier concurrently
    ///
    /// # Arguments
    /// * `identifiers` - Distinct module identifiers
    /// * `max_concurrency` - Cap on in-flight lookups, `None` for no cap
    /// * `on_progress` - Called after each lookup with `(completed, total, identifier)`
    pub async fn enrich_with_progress<F>(
        &self,
        identifiers: Vec<String>,
        max_concurrency: Option<usize>,
        on_progress: F,
    ) -> EnrichmentOutcome
    where
        F: Fn(usize, usize, &str),
    {
        let total = identifiers.len();
        let results: DashMap<String, String> = DashMap::with_capacity(total);
        let completed = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);

        stream::iter(identifiers)
            .for_each_concurrent(max_concurrency, |identifier| {
                let results = &results;
                let completed = &completed;
                let failed = &failed;
                let on_progress = &on_progress;
                async move {
                    let description = match self
                        .description_repository
                        .describe_module(&identifier)
                        .await
                    {
                        Ok(description) => description,
                        Err(e) => {
                            failed.fetch_add(1, Ordering::Relaxed);
                            format!("({})", e)
                        }
                    };

                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    on_progress(done, total, &identifier);
                    results.insert(identifier, description);
                }
            })
            .await;

        let failed = failed.into_inner();
        EnrichmentOutcome {
            descriptions: results.into_iter().collect(),
            succeeded: total - failed,
            failed,
        }
    }

    /// Same as `enrich_with_progress` without a progress callback
    pub async fn enrich(
        &self,
        identifiers: Vec<String>,
        max_concurrency: Option<usize>,
    ) -> EnrichmentOutcome {
        self.enrich_with_progress(identifiers, max_concurrency, |_, _, _| {})
            .await
    }
}
