use super::description_suffix;
use crate::application::dto::DependencyReport;
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// ExportFormatter adapter rendering the flat, sorted module list
///
/// The list is already deduplicated and stripped of toolchain entries by the
/// time it reaches this formatter; it only lays it out one per line.
pub struct ExportFormatter;

impl ExportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for ExportFormatter {
    fn format(&self, report: &DependencyReport) -> Result<String> {
        let descriptions = report.descriptions();
        let mut output = String::new();

        for module in report.modules() {
            let description = descriptions.and_then(|d| d.get(module));
            writeln!(
                output,
                "{}{}",
                module,
                description_suffix(description, descriptions.is_some())
            )?;
        }

        Ok(output)
    }
}
