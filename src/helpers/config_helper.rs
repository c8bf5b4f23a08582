use crate::config::constants::{DEFAULT_POLLER_WORKER_THREADS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SERVER_PORT};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_server_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_worker_threads() -> usize {
        DEFAULT_POLLER_WORKER_THREADS
    }

    pub fn default_poll_interval_ms() -> u64 {
        DEFAULT_POLL_INTERVAL_MS
    }

    pub fn default_enterprise() -> bool {
        false
    }
}
