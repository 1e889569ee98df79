/// ProgressReporter port for user feedback during a run
///
/// Messages go to a side channel (stderr for the CLI) so that they never
/// mix with the rendered dependency listing on stdout.
pub trait ProgressReporter: Send + Sync {
    /// Reports an informational step, e.g. "Reading module graph"
    fn report(&self, message: &str);

    /// Reports how many of `total` items are done
    ///
    /// # Arguments
    /// * `current` - Items completed so far
    /// * `total` - Items expected
    /// * `message` - Optional label for the item just completed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal problem
    fn report_warning(&self, message: &str);

    /// Reports the end of a long-running step and clears any progress display
    fn report_completion(&self, message: &str);
}
