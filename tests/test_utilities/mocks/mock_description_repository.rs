use async_trait::async_trait;
use deptree::prelude::*;
use deptree::shared::error::DescriptionError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock DescriptionRepository keyed by "owner/repo"
///
/// Repositories without a registered description answer with status 404.
#[derive(Default, Clone)]
pub struct MockDescriptionRepository {
    descriptions: HashMap<String, String>,
    pub call_count: Arc<AtomicUsize>,
}

impl MockDescriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, repository: &str, description: &str) -> Self {
        self.descriptions
            .insert(repository.to_string(), description.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DescriptionRepository for MockDescriptionRepository {
    async fn fetch_description(&self, repository: &GitHubRepository) -> Result<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.descriptions
            .get(&repository.to_string())
            .cloned()
            .ok_or_else(|| DescriptionError::UnexpectedStatus(404).into())
    }
}
