/// ProgressReporter port for reporting progress during an analysis
///
/// Messages go to the user (stderr), separate from structured logging.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Signals that a potentially slow step (a native tool run) started
    ///
    /// # Arguments
    /// * `message` - Description shown while the step runs
    fn start_task(&self, message: &str);

    /// Signals that the step started by `start_task` finished
    fn finish_task(&self);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of the analysis
    fn report_completion(&self, message: &str);
}
