use async_trait::async_trait;
use deptree::prelude::*;
use deptree::ports::outbound::ProvisionedWorkspace;
use std::sync::{Arc, Mutex};

/// Mock WorkspaceProvisioner creating empty temporary directories
#[derive(Default, Clone)]
pub struct MockWorkspaceProvisioner {
    pub packages: Arc<Mutex<Vec<String>>>,
}

impl MockWorkspaceProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provisioned_packages(&self) -> Vec<String> {
        self.packages.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkspaceProvisioner for MockWorkspaceProvisioner {
    async fn provision(&self, package: &str) -> Result<ProvisionedWorkspace> {
        self.packages.lock().unwrap().push(package.to_string());
        Ok(ProvisionedWorkspace::new(tempfile::TempDir::new()?))
    }
}
