/// Network adapters for the repository metadata API
mod caching_description_repository;
mod github_client;

pub use caching_description_repository::CachingDescriptionRepository;
pub use github_client::GitHubDescriptionRepository;
