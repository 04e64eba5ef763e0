use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`; output is controlled by the subscriber
/// installed in the binary.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "receipt_processor", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "receipt_processor", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "receipt_processor", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "receipt_processor", "{}", message);
    }
}
