pub mod analysis_cancellation_service;
pub mod analysis_properties_provider;
pub mod analysis_tracker;
pub mod http;
pub mod instance_configuration_provider;
pub mod remote_analysis_service;
pub mod repo_scanner;
pub mod roslyn_sensor;
