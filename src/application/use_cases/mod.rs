/// Use cases module containing application business logic orchestration
mod analyze_dependencies;
mod enrich_descriptions;

pub use analyze_dependencies::AnalyzeDependenciesUseCase;
pub use enrich_descriptions::{EnrichDescriptionsUseCase, EnrichmentOutcome};
