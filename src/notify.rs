//! User notifications raised by page controllers

use tracing::warn;

use crate::client::ClientError;

/// Where success and error notices go: toasts in the browser, stderr in the CLI
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Log a failed call and show the server detail, or `fallback`
pub(crate) fn report_failure(notify: &dyn Notifier, error: &ClientError, fallback: &str) {
    warn!(error = %error, "{}", fallback);
    notify.error(&error.user_message(fallback));
}

/// Notices collected in memory
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    successes: std::cell::RefCell<Vec<String>>,
    errors: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub(crate) fn successes(&self) -> Vec<String> {
        self.successes.borrow().clone()
    }

    pub(crate) fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub(crate) fn is_silent(&self) -> bool {
        self.successes.borrow().is_empty() && self.errors.borrow().is_empty()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
