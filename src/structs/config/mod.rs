pub mod analysis_config;
pub mod config;
pub mod poller_config;
pub mod rule_config;
pub mod server_config;
