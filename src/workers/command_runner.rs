use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::adapters::local_sensor_context::LocalSensorContext;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{CANCEL_GRACE_PERIOD, INTERRUPTED_EXIT_CODE};
use crate::enums::commands::Commands;
use crate::errors::{BridgeError, BridgeResult};
use crate::logger::issue_logger::IssueLogger;
use crate::services::analysis_cancellation_service::AnalysisCancellationService;
use crate::services::http::http_analysis_request_handler::HttpAnalysisRequestHandler;
use crate::services::http::http_client_handler::{HttpClientHandler, ServerEndpoint};
use crate::services::http::json_request_builder::JsonRequestBuilder;
use crate::services::instance_configuration_provider::InstanceConfigurationProvider;
use crate::services::remote_analysis_service::RemoteAnalysisService;
use crate::services::repo_scanner::RepoScanner;
use crate::services::roslyn_sensor::RoslynSensor;
use crate::structs::config::config::Config;
use crate::traits::sensor_context::SensorContext;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    /// Must run outside of any tokio runtime: the analyze request blocks its thread.
    pub fn run_command(&mut self, command: Commands) -> BridgeResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init { config } => self.init_command(config.as_deref()),
            Commands::Validate { config } => self.validate_command(config.as_deref()).map(|_| ()),
            Commands::Analyze { path, config } => self.analyze_command(&path, config.as_deref()),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self, config_path: Option<&Path>) -> BridgeResult<()> {
        log::info!("🚀 Initializing roslyn-bridge configuration...");

        ConfigManager::create_sample_config(config_path)?;
        log::info!("📝 Set the analyzer server port and token in the configuration file.");
        log::info!("🔧 Run 'roslyn-bridge validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self, config_path: Option<&Path>) -> BridgeResult<Config> {
        let config = ConfigManager::load(config_path)?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid ({} active rules)", config.rules.len());
                Ok(config)
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("❌ {}", error);
                }
                Err(BridgeError::config_error(
                    &format!("{} configuration problems found", errors.len()),
                    None,
                    Some("Fix the problems above or run 'roslyn-bridge init' for a sample file"),
                ))
            }
        }
    }

    fn analyze_command(&self, path: &Path, config_path: Option<&Path>) -> BridgeResult<()> {
        log::info!("🔍 Starting Roslyn analysis of {}", path.display());

        let config = self.validate_command(config_path)?;
        let settings = config.to_settings();
        let root: PathBuf = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        let input_files = RepoScanner::new(&root, settings.clone()).scan_files()?;
        let context = Arc::new(LocalSensorContext::new(settings.clone(), input_files, config.active_rules()?));

        let poller = Arc::new(AnalysisCancellationService::with_settings(
            config.poller.worker_threads,
            config.poller.poll_interval(),
        )?);
        let runtime = poller.handle()?;

        let transport = Arc::new(HttpClientHandler::new(ServerEndpoint::from_settings(&settings)?, JsonRequestBuilder::new())?);
        let request_handler = Arc::new(HttpAnalysisRequestHandler::new(transport, runtime.clone()));
        let remote_analysis_service = Arc::new(RemoteAnalysisService::new(poller.clone(), request_handler.clone(), context.clone()));
        let sensor = RoslynSensor::new(InstanceConfigurationProvider::new(&settings), remote_analysis_service);

        let cancel_context = Arc::clone(&context);
        let ctrl_c_watcher = runtime.spawn(async move {
            let mut presses = 0;
            while tokio::signal::ctrl_c().await.is_ok() {
                presses += 1;
                if Self::on_interrupt(&cancel_context, presses) {
                    log::error!("🛑 Interrupted again, exiting without waiting for the analyzer");
                    std::process::exit(INTERRUPTED_EXIT_CODE);
                }
            }
        });

        let result = sensor.execute(context.as_ref());

        ctrl_c_watcher.abort();
        request_handler.wait_for_pending_cancels(CANCEL_GRACE_PERIOD);
        poller.stop();

        let saved = result?;
        if context.is_cancelled() {
            log::warn!("⚠️ Analysis was cancelled, results may be incomplete");
        }

        IssueLogger::print_issue_report(&root, &context.reported_issues());
        log::info!("✅ Reported {} issues", saved);
        Ok(())
    }

    /// First press cancels the scan. Returns true when the process should exit right away.
    fn on_interrupt(context: &LocalSensorContext, presses: usize) -> bool {
        if presses > 1 {
            return true;
        }

        context.cancel();
        log::warn!("⚠️ Waiting for the analyzer to stop, press Ctrl-C again to exit immediately");
        false
    }
}
