use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use tempfile::TempDir;

/// Temporary module directory holding a single fetched package.
///
/// The directory is removed when the workspace is dropped.
#[derive(Debug)]
pub struct ProvisionedWorkspace {
    dir: TempDir,
}

impl ProvisionedWorkspace {
    pub fn new(dir: TempDir) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// WorkspaceProvisioner port for resolving a remote package
///
/// Implementations create a throwaway module that depends on the requested
/// package, so that the module graph command can run inside it.
#[async_trait]
pub trait WorkspaceProvisioner: Send + Sync {
    /// Creates a workspace whose module graph includes `package`
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the package
    /// cannot be fetched. Fetch failures carry the tool's combined output.
    async fn provision(&self, package: &str) -> Result<ProvisionedWorkspace>;
}
