use crate::adapters::outbound::formatters::{ExportFormatter, TreeFormatter};
use crate::application::dto::OutputMode;
use crate::ports::outbound::DependencyFormatter;

/// Factory for creating dependency formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output mode
    ///
    /// # Examples
    /// ```
    /// use deptree::application::dto::OutputMode;
    /// use deptree::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputMode::Tree);
    /// ```
    pub fn create(mode: OutputMode) -> Box<dyn DependencyFormatter> {
        match mode {
            OutputMode::Tree => Box::new(TreeFormatter::new()),
            OutputMode::Export => Box::new(ExportFormatter::new()),
        }
    }
}
