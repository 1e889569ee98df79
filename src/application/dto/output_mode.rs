/// Output mode for the rendered listing
///
/// Both the CLI and the formatter factory need this, so it lives in the
/// application layer rather than in either adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Box-drawing tree rooted at the selected module (default)
    #[default]
    Tree,
    /// Sorted flat list of every module in the graph
    Export,
}

impl OutputMode {
    pub fn from_export_flag(export: bool) -> Self {
        if export {
            OutputMode::Export
        } else {
            OutputMode::Tree
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Tree => write!(f, "tree"),
            OutputMode::Export => write!(f, "export"),
        }
    }
}
