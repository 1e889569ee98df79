//! deptree - dependency tree viewer for Go modules
//!
//! This library turns `go mod graph` output into a rooted, deduplicated
//! tree, optionally annotates each module with its GitHub repository
//! description, and renders the result as a box-drawing tree or a flat list.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_tree`): Edge maps, nodes, tree building
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deptree::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let toolchain = GoToolchain::new();
//! let descriptions = CachingDescriptionRepository::new(GitHubDescriptionRepository::new(None)?);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AnalyzeDependenciesUseCase::new(
//!     toolchain.clone(),
//!     toolchain,
//!     descriptions,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = DeptreeRequest::new(
//!     ModuleSource::LocalPath(PathBuf::from(".")),
//!     OutputMode::Tree,
//!     true,
//!     None,
//! );
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! if let Some(report) = response.report {
//!     print!("{}", TreeFormatter::new().format(&report)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_tree;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{ExportFormatter, TreeFormatter};
    pub use crate::adapters::outbound::network::{
        CachingDescriptionRepository, GitHubDescriptionRepository,
    };
    pub use crate::adapters::outbound::toolchain::GoToolchain;
    pub use crate::application::dto::{
        DependencyReport, DeptreeRequest, DeptreeResponse, ModuleSource, OutputMode,
    };
    pub use crate::application::use_cases::{AnalyzeDependenciesUseCase, EnrichDescriptionsUseCase};
    pub use crate::dependency_tree::domain::{
        DependencyTree, Descriptions, EdgeMap, GitHubRepository, Node,
    };
    pub use crate::dependency_tree::services::{EdgeListParser, ModuleCollector, TreeBuilder};
    pub use crate::ports::outbound::{
        DependencyFormatter, DescriptionRepository, ModuleGraphSource, OutputPresenter,
        ProgressReporter, WorkspaceProvisioner,
    };
    pub use crate::shared::Result;
}
