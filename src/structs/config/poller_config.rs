use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::config::constants::poll_interval;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    #[serde(default = "ConfigHelper::default_worker_threads")]
    pub worker_threads: usize,

    #[serde(default = "ConfigHelper::default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl PollerConfig {
    pub fn poll_interval(&self) -> Duration {
        poll_interval(self.poll_interval_ms)
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            worker_threads: ConfigHelper::default_worker_threads(),
            poll_interval_ms: ConfigHelper::default_poll_interval_ms(),
        }
    }
}
