use crate::application::dto::DependencyReport;
use crate::shared::Result;

/// DependencyFormatter port for rendering analysis results
///
/// This port abstracts the textual layout (tree listing, flat export list).
pub trait DependencyFormatter {
    /// Renders the report as text, one line per module
    ///
    /// # Errors
    /// Returns an error if writing the output buffer fails
    fn format(&self, report: &DependencyReport) -> Result<String>;
}
