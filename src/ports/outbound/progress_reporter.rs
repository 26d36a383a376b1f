/// ProgressReporter port for diagnostics during a search session
///
/// This port abstracts stderr feedback (loading indicator, warnings,
/// completion notes) so it never mixes with the rendered view on stdout.
pub trait ProgressReporter {
    /// Reports a plain progress message
    fn report(&self, message: &str);

    /// Signals that a fetch for `query` is now in flight
    fn report_loading(&self, query: &str);

    /// Reports an error or warning message, ending any loading indicator
    fn report_error(&self, message: &str);

    /// Reports completion of a fetch, ending any loading indicator
    fn report_completion(&self, message: &str);
}
