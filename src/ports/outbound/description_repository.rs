use crate::dependency_tree::domain::GitHubRepository;
use crate::shared::error::DescriptionError;
use crate::shared::Result;
use async_trait::async_trait;

/// DescriptionRepository port for fetching repository descriptions
///
/// This port abstracts the remote metadata API (e.g., the GitHub REST API)
/// used to annotate modules with a one-line description.
///
/// # Async Support
/// Lookups run concurrently, so implementations must be `Send + Sync`.
#[async_trait]
pub trait DescriptionRepository: Send + Sync {
    /// Fetches the description of a repository
    ///
    /// # Errors
    /// Returns a `DescriptionError` if the request fails, the API answers
    /// with a non-200 status, the body cannot be decoded, or the
    /// description is empty.
    async fn fetch_description(&self, repository: &GitHubRepository) -> Result<String>;

    /// Fetches the description for a module identifier
    ///
    /// Identifiers that do not follow `github.com/<owner>/<repo>` fail with
    /// `DescriptionError::NotGitHubModule` without any network call.
    async fn describe_module(&self, identifier: &str) -> Result<String> {
        let repository = GitHubRepository::from_module_path(identifier)
            .ok_or(DescriptionError::NotGitHubModule)?;
        self.fetch_description(&repository).await
    }
}
