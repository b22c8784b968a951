//! Observability for the invoice subsystem
//!
//! Structured JSON logging over a typed event catalog.
//!
//! # Usage
//!
//! ```ignore
//! use invoice_fields::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SchemaFailOpen, &[("code", "unsupported_type")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_with_fields() {
        // no panic
        log_event_with_fields(Event::SettingsLoaded, &[]);
        log_event_with_fields(Event::FieldsCompiled, &[("count", "2")]);
    }
}
