use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// ModuleGraphSource port for obtaining the raw module graph
///
/// This port abstracts the package manager command (e.g., `go mod graph`)
/// that lists the resolved dependency edges of a module.
#[async_trait]
pub trait ModuleGraphSource: Send + Sync {
    /// Runs the graph command in `project_dir` and returns its standard output
    ///
    /// The output holds one `from to` edge per line.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The command cannot be started
    /// - The command exits with a non-zero status
    async fn module_graph(&self, project_dir: &Path) -> Result<Vec<u8>>;
}
