pub mod http_analysis_request_handler;
pub mod http_client_handler;
pub mod json_request_builder;
