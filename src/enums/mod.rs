pub mod analyze_outcome;
pub mod commands;
pub mod language;
pub mod poller_error;
pub mod transport_error;
