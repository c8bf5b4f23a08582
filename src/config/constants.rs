use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
pub const DEFAULT_POLLER_WORKER_THREADS: usize = 2;
pub const POLLER_THREAD_NAME: &str = "analysis-cancellation";
pub const DEFAULT_SERVER_PORT: u16 = 60000;
pub const SERVER_HOST: &str = "localhost";

pub const ANALYZE_ENDPOINT: &str = "analyze";
pub const CANCEL_ENDPOINT: &str = "cancel";
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
pub const CANCEL_GRACE_PERIOD: Duration = Duration::from_millis(500);

pub const INTERRUPTED_EXIT_CODE: i32 = 130;

pub const SENSOR_NAME: &str = "SQVS-Roslyn";
pub const HTML_LANGUAGE_KEY: &str = "web";

pub const PROP_PREFIX: &str = "sonar.";
pub const PLUGIN_PREFIX: &str = "sqvsRoslynPlugin.";

pub const SERVER_PORT_KEY: &str = "sonar.sqvsRoslynPlugin.internal.serverPort";
pub const SERVER_TOKEN_KEY: &str = "sonar.sqvsRoslynPlugin.internal.serverToken";
pub const SHOULD_USE_CSHARP_ENTERPRISE_KEY: &str = "sonar.cs.internal.shouldUseCsharpEnterprise";
pub const SHOULD_USE_VB_ENTERPRISE_KEY: &str = "sonar.cs.internal.shouldUseVbEnterprise";

pub const CONFIG_DIR_NAME: &str = ".roslyn-bridge";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const SCANNER_IGNORED_DIRS: &[&str] = &[".git/", "bin/", "obj/", ".vs/", "node_modules/", "packages/"];

pub fn poll_interval(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
