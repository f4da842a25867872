/// ProgressReporter port for reporting progress during a probe run
///
/// Progress is diagnostic text for humans. It must never reach stdout,
/// which carries only the JSON document.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Signals that a blocking step has started (e.g. waiting on dpkg)
    ///
    /// The default implementation just reports the message.
    fn report_waiting(&self, message: &str) {
        self.report(message);
    }

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message);
    }

    fn report_waiting(&self, message: &str) {
        (**self).report_waiting(message);
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message);
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message);
    }
}
