use super::OutputMode;
use std::path::PathBuf;

/// Where the module graph comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleSource {
    /// An existing Go module directory
    LocalPath(PathBuf),
    /// A package fetched into a throwaway workspace, e.g. `github.com/spf13/cobra@v1.7.0`
    RemotePackage(String),
}

impl ModuleSource {
    /// Package name used to re-root the tree, if any
    pub fn requested_package(&self) -> Option<&str> {
        match self {
            ModuleSource::LocalPath(_) => None,
            ModuleSource::RemotePackage(package) => Some(package),
        }
    }
}

/// DeptreeRequest - Internal request DTO for the analysis use case
#[derive(Debug, Clone)]
pub struct DeptreeRequest {
    pub source: ModuleSource,
    pub output_mode: OutputMode,
    /// Whether to look up GitHub repository descriptions
    pub fetch_descriptions: bool,
    /// Upper bound on in-flight description lookups; None means one task per module
    pub max_concurrency: Option<usize>,
}

impl DeptreeRequest {
    pub fn new(
        source: ModuleSource,
        output_mode: OutputMode,
        fetch_descriptions: bool,
        max_concurrency: Option<usize>,
    ) -> Self {
        Self {
            source,
            output_mode,
            fetch_descriptions,
            max_concurrency,
        }
    }
}
