use async_trait::async_trait;
use deptree::prelude::*;
use deptree::shared::error::DeptreeError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ModuleGraphSource returning canned `go mod graph` output
#[derive(Clone)]
pub struct MockModuleGraphSource {
    output: Option<String>,
    pub requested_dirs: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockModuleGraphSource {
    pub fn new(output: &str) -> Self {
        Self {
            output: Some(output.to_string()),
            requested_dirs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A source whose command exits non-zero
    pub fn failing() -> Self {
        Self {
            output: None,
            requested_dirs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requested_dirs(&self) -> Vec<PathBuf> {
        self.requested_dirs.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModuleGraphSource for MockModuleGraphSource {
    async fn module_graph(&self, project_dir: &Path) -> Result<Vec<u8>> {
        self.requested_dirs
            .lock()
            .unwrap()
            .push(project_dir.to_path_buf());

        match &self.output {
            Some(output) => Ok(output.as_bytes().to_vec()),
            None => Err(DeptreeError::CommandFailed {
                command: "go mod graph".to_string(),
                details: "exit status: 1\nOutput: go: cannot find main module".to_string(),
            }
            .into()),
        }
    }
}
