use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_server_port")]
    pub port: u16,

    /// Shared secret sent as `X-Auth-Token`.
    #[serde(default)]
    pub token: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: ConfigHelper::default_server_port(),
            token: String::new(),
        }
    }
}
