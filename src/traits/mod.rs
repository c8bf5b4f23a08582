pub mod analysis_canceller;
pub mod analysis_registrar;
pub mod analysis_tracker;
pub mod analysis_transport;
pub mod sensor_context;
