use super::OutputMode;
use crate::dependency_tree::domain::{DependencyTree, Descriptions};

/// Everything a formatter needs to render one run
#[derive(Debug, Clone)]
pub struct DependencyReport {
    tree: DependencyTree,
    /// Flat module list, only populated in export mode
    modules: Vec<String>,
    /// None = descriptions were not requested
    descriptions: Option<Descriptions>,
}

impl DependencyReport {
    pub fn new(
        tree: DependencyTree,
        modules: Vec<String>,
        descriptions: Option<Descriptions>,
    ) -> Self {
        Self {
            tree,
            modules,
            descriptions,
        }
    }

    pub fn tree(&self) -> &DependencyTree {
        &self.tree
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn descriptions(&self) -> Option<&Descriptions> {
        self.descriptions.as_ref()
    }

    pub fn descriptions_enabled(&self) -> bool {
        self.descriptions.is_some()
    }
}

/// DeptreeResponse - Internal response DTO from the analysis use case
#[derive(Debug, Clone)]
pub struct DeptreeResponse {
    pub output_mode: OutputMode,
    /// None when the module graph had no edges
    pub report: Option<DependencyReport>,
}

impl DeptreeResponse {
    pub fn new(output_mode: OutputMode, report: Option<DependencyReport>) -> Self {
        Self {
            output_mode,
            report,
        }
    }

    pub fn empty(output_mode: OutputMode) -> Self {
        Self::new(output_mode, None)
    }
}
