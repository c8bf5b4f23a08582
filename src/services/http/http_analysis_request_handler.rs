use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tokio::task::JoinHandle;
use uuid::Uuid;
use crate::enums::analyze_outcome::AnalyzeOutcome;
use crate::enums::transport_error::TransportError;
use crate::errors::{BridgeError, BridgeResult};
use crate::structs::host::active_rule::ActiveRule;
use crate::structs::http::analyzer_info_dto::AnalyzerInfoDto;
use crate::structs::http::raw_response::RawResponse;
use crate::structs::protocol::analysis_response_dto::AnalysisResponseDto;
use crate::structs::protocol::roslyn_issue::RoslynIssue;
use crate::traits::analysis_canceller::AnalysisCanceller;
use crate::traits::analysis_transport::AnalysisTransport;

/// Turns transport replies into issues and sends cancellations in the background.
pub struct HttpAnalysisRequestHandler {
    transport: Arc<dyn AnalysisTransport>,
    runtime: Handle,
    pending_cancels: Mutex<Vec<JoinHandle<bool>>>,
}

impl HttpAnalysisRequestHandler {
    /// `runtime` runs the fire-and-forget cancel requests.
    pub fn new(transport: Arc<dyn AnalysisTransport>, runtime: Handle) -> Self {
        Self {
            transport,
            runtime,
            pending_cancels: Mutex::new(Vec::new()),
        }
    }

    pub fn analyze(
        &self,
        file_uris: &[String],
        active_rules: &[ActiveRule],
        analysis_properties: &BTreeMap<String, String>,
        analyzer_info: AnalyzerInfoDto,
        analysis_id: Uuid,
    ) -> BridgeResult<Vec<RoslynIssue>> {
        let response = match self.transport.send_analyze_request(
            file_uris,
            active_rules,
            analysis_properties,
            analyzer_info,
            analysis_id,
        ) {
            Ok(response) => response,
            Err(TransportError::Interrupted) => {
                log::debug!("Interrupted!");
                return Ok(Vec::new());
            }
            Err(e) => return Err(Self::crashed(&e.to_string())),
        };

        let outcome = Self::interpret_response(&response).map_err(|e| Self::crashed(&e.to_string()))?;
        match &outcome {
            AnalyzeOutcome::UnexpectedStatus(_) => log::error!("{}", outcome),
            AnalyzeOutcome::NoBody => log::warn!("{}", outcome),
            AnalyzeOutcome::Issues(_) => log::debug!("{}", outcome),
        }

        Ok(outcome.into_issues())
    }

    pub fn interpret_response(response: &RawResponse) -> serde_json::Result<AnalyzeOutcome> {
        if !response.is_ok() {
            return Ok(AnalyzeOutcome::UnexpectedStatus(response.status));
        }

        let body = match response.body.as_deref().map(str::trim) {
            Some(body) if !body.is_empty() => body,
            _ => return Ok(AnalyzeOutcome::NoBody),
        };

        Ok(match serde_json::from_str::<Option<AnalysisResponseDto>>(body)? {
            Some(dto) => AnalyzeOutcome::Issues(dto.roslyn_issues),
            None => AnalyzeOutcome::NoBody,
        })
    }

    /// Sends the cancel request on the background runtime. The task resolves to
    /// whether the server acknowledged it; failures are only logged.
    pub fn cancel(&self, analysis_id: Uuid) -> JoinHandle<bool> {
        let request = self.transport.send_cancel_request(analysis_id);

        self.runtime.spawn(async move {
            match request.await {
                Ok(response) if response.is_ok() => {
                    log::debug!("Analyzer acknowledged cancellation of {}", analysis_id);
                    true
                }
                Ok(response) => {
                    log::error!("Response from cancel request is {}.", response.status);
                    false
                }
                Err(e) => {
                    log::error!("Failed to cancel analysis due to: {}", e);
                    false
                }
            }
        })
    }

    /// Gives cancel requests still in flight up to `grace` to finish, so their
    /// outcome is logged before the runtime goes away. Returns how many finished.
    /// Must not be called from inside an async context.
    pub fn wait_for_pending_cancels(&self, grace: Duration) -> usize {
        let pending: Vec<_> = match self.pending_cancels.lock() {
            Ok(mut pending) => pending.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        };
        if pending.is_empty() {
            return 0;
        }

        log::debug!("Waiting for {} cancel request(s)", pending.len());
        self.runtime.block_on(async move {
            let deadline = Instant::now() + grace;
            let mut finished = 0;
            for cancel in pending {
                if tokio::time::timeout_at(deadline, cancel).await.is_ok() {
                    finished += 1;
                } else {
                    log::debug!("Cancel request still pending after {:?}", grace);
                }
            }
            finished
        })
    }

    fn crashed(reason: &str) -> BridgeError {
        BridgeError::analysis_error("analyze request", &format!("Response crashed due to: {}", reason), false)
    }
}

impl AnalysisCanceller for HttpAnalysisRequestHandler {
    fn cancel_analysis(&self, analysis_id: Uuid) {
        let cancel = self.cancel(analysis_id);
        match self.pending_cancels.lock() {
            Ok(mut pending) => {
                pending.retain(|task| !task.is_finished());
                pending.push(cancel);
            }
            Err(poisoned) => poisoned.into_inner().push(cancel),
        }
    }
}
