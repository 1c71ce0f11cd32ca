use ibc_core_host_types::error::HostError;
use ibc_primitives::{ModuleEvent, Timestamp};

/// Context to be implemented by the host that provides all "read-only" methods.
pub trait ValidationContext {
    /// Returns the current timestamp of the local chain.
    fn host_timestamp(&self) -> Result<Timestamp, HostError>;
}

/// Context to be implemented by the host that provides all "write-only" methods.
pub trait ExecutionContext: ValidationContext {
    /// Hands an event to the host's event sink. Delivery is the host's
    /// concern, so emitting cannot fail.
    fn emit_event(&mut self, event: ModuleEvent);

    /// Logs the given message.
    fn log_message(&mut self, message: String);
}

impl<T: ValidationContext + ?Sized> ValidationContext for &mut T {
    fn host_timestamp(&self) -> Result<Timestamp, HostError> {
        (**self).host_timestamp()
    }
}

impl<T: ExecutionContext + ?Sized> ExecutionContext for &mut T {
    fn emit_event(&mut self, event: ModuleEvent) {
        (**self).emit_event(event)
    }

    fn log_message(&mut self, message: String) {
        (**self).log_message(message)
    }
}
