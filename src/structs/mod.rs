pub mod cli;
pub mod config;
pub mod host;
pub mod http;
pub mod protocol;
