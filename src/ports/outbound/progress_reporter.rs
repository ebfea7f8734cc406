/// ProgressReporter port for user-facing status messages
///
/// Messages go to stderr so they never mix with report output on stdout.
pub trait ProgressReporter {
    /// A step of the analysis finished or started
    fn report(&self, message: &str);

    /// Something the user should notice but that does not stop the run,
    /// such as an unknown package name
    fn report_error(&self, message: &str);

    /// The last step of a run succeeded
    fn report_completion(&self, message: &str);
}
