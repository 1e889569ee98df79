use super::description_suffix;
use crate::application::dto::DependencyReport;
use crate::dependency_tree::domain::Node;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Connector for every sibling except the last
const BRANCH: &str = "├── ";
/// Connector for the last sibling
const LAST_BRANCH: &str = "└── ";
/// Indentation below a non-last sibling
const VERTICAL: &str = "│   ";
/// Indentation below the last sibling
const SPACE: &str = "    ";

/// TreeFormatter adapter rendering the dependency tree with box-drawing connectors
///
/// Children are listed in lexicographic order at every level.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_children(
        output: &mut String,
        node: &Node,
        prefix: &str,
        descriptions_enabled: bool,
    ) -> std::fmt::Result {
        let count = node.children().len();
        for (index, child) in node.children().enumerate() {
            let is_last = index + 1 == count;
            let (connector, extension) = if is_last {
                (LAST_BRANCH, SPACE)
            } else {
                (BRANCH, VERTICAL)
            };

            writeln!(
                output,
                "{}{}{}{}",
                prefix,
                connector,
                child.name(),
                description_suffix(child.description(), descriptions_enabled)
            )?;

            let child_prefix = format!("{}{}", prefix, extension);
            Self::write_children(output, child, &child_prefix, descriptions_enabled)?;
        }
        Ok(())
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for TreeFormatter {
    fn format(&self, report: &DependencyReport) -> Result<String> {
        let root = report.tree().root();
        let enabled = report.descriptions_enabled();

        let mut output = String::new();
        writeln!(
            output,
            "{}{}",
            root.name(),
            description_suffix(root.description(), enabled)
        )?;
        Self::write_children(&mut output, root, "", enabled)?;

        Ok(output)
    }
}
