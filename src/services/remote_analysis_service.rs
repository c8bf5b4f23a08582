use std::collections::BTreeMap;
use std::sync::Arc;
use crate::errors::BridgeResult;
use crate::services::analysis_tracker::AnalysisTrackerImpl;
use crate::services::http::http_analysis_request_handler::HttpAnalysisRequestHandler;
use crate::structs::host::active_rule::ActiveRule;
use crate::structs::http::analyzer_info_dto::AnalyzerInfoDto;
use crate::structs::protocol::roslyn_issue::RoslynIssue;
use crate::traits::analysis_registrar::AnalysisRegistrar;
use crate::traits::sensor_context::SensorContext;

/// Runs one remote analysis per call, tracked for cancellation while it is in flight.
pub struct RemoteAnalysisService {
    registrar: Arc<dyn AnalysisRegistrar>,
    request_handler: Arc<HttpAnalysisRequestHandler>,
    context: Arc<dyn SensorContext>,
}

impl RemoteAnalysisService {
    pub fn new(
        registrar: Arc<dyn AnalysisRegistrar>,
        request_handler: Arc<HttpAnalysisRequestHandler>,
        context: Arc<dyn SensorContext>,
    ) -> Self {
        Self { registrar, request_handler, context }
    }

    pub fn analyze(
        &self,
        file_uris: &[String],
        active_rules: &[ActiveRule],
        analysis_properties: &BTreeMap<String, String>,
        analyzer_info: AnalyzerInfoDto,
    ) -> BridgeResult<Vec<RoslynIssue>> {
        let guard = AnalysisTrackerImpl::start(
            Arc::clone(&self.context),
            self.request_handler.clone(),
            self.registrar.as_ref(),
        )?;

        log::info!("🔍 Analyzing {} files with {} active rules", file_uris.len(), active_rules.len());

        self.request_handler.analyze(
            file_uris,
            active_rules,
            analysis_properties,
            analyzer_info,
            guard.analysis_id(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use uuid::Uuid;
    use crate::enums::poller_error::PollerError;
    use crate::enums::transport_error::TransportError;
    use crate::errors::BridgeError;
    use crate::structs::http::raw_response::RawResponse;
    use crate::traits::analysis_registrar::MockAnalysisRegistrar;
    use crate::traits::analysis_tracker::AnalysisTracker;
    use crate::traits::analysis_transport::MockAnalysisTransport;
    use crate::traits::sensor_context::MockSensorContext;

    type Captured = Arc<Mutex<Vec<Arc<dyn AnalysisTracker>>>>;

    fn capturing_registrar() -> (MockAnalysisRegistrar, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        let mut registrar = MockAnalysisRegistrar::new();
        registrar.expect_register_analysis().returning(move |tracker| {
            sink.lock().unwrap().push(tracker);
            Ok(())
        });
        (registrar, captured)
    }

    fn service(
        registrar: MockAnalysisRegistrar,
        transport: MockAnalysisTransport,
    ) -> (tokio::runtime::Runtime, RemoteAnalysisService) {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
        let handler = Arc::new(HttpAnalysisRequestHandler::new(Arc::new(transport), runtime.handle().clone()));
        let mut context = MockSensorContext::new();
        context.expect_is_cancelled().return_const(false);
        let service = RemoteAnalysisService::new(Arc::new(registrar), handler, Arc::new(context));
        (runtime, service)
    }

    fn analyze(service: &RemoteAnalysisService) -> BridgeResult<Vec<RoslynIssue>> {
        service.analyze(&["file:///a.cs".to_string()], &[], &BTreeMap::new(), AnalyzerInfoDto::default())
    }

    #[test]
    fn request_carries_the_tracked_run_id_and_run_is_released() {
        let (registrar, captured) = capturing_registrar();
        let sent_id = Arc::new(Mutex::new(None::<Uuid>));
        let sink = Arc::clone(&sent_id);
        let mut transport = MockAnalysisTransport::new();
        transport.expect_send_analyze_request().times(1).returning(move |_, _, _, _, id| {
            *sink.lock().unwrap() = Some(id);
            Ok(RawResponse::new(200, Some(r#"{"RoslynIssues":[{"RuleId":"S100"}]}"#.to_string())))
        });
        let (_runtime, service) = service(registrar, transport);

        let issues = analyze(&service).unwrap();

        assert_eq!(issues.len(), 1);
        let trackers = captured.lock().unwrap();
        assert_eq!(trackers.len(), 1);
        assert_eq!(Some(trackers[0].analysis_id()), *sent_id.lock().unwrap());
        assert!(trackers[0].cancel_if_needed());
    }

    #[test]
    fn run_is_released_when_the_request_fails() {
        let (registrar, captured) = capturing_registrar();
        let mut transport = MockAnalysisTransport::new();
        transport
            .expect_send_analyze_request()
            .returning(|_, _, _, _, _| Err(TransportError::Request("boom".to_string())));
        let (_runtime, service) = service(registrar, transport);

        let error = analyze(&service).unwrap_err();

        assert!(error.to_string().contains("Response crashed due to: boom"));
        assert!(captured.lock().unwrap()[0].cancel_if_needed());
    }

    #[test]
    fn each_call_gets_its_own_run() {
        let (registrar, captured) = capturing_registrar();
        let mut transport = MockAnalysisTransport::new();
        transport
            .expect_send_analyze_request()
            .times(2)
            .returning(|_, _, _, _, _| Ok(RawResponse::new(200, None)));
        let (_runtime, service) = service(registrar, transport);

        analyze(&service).unwrap();
        analyze(&service).unwrap();

        let trackers = captured.lock().unwrap();
        assert_ne!(trackers[0].analysis_id(), trackers[1].analysis_id());
    }

    #[test]
    fn rejected_registration_skips_the_request() {
        let mut registrar = MockAnalysisRegistrar::new();
        registrar
            .expect_register_analysis()
            .returning(|tracker| Err(PollerError::Rejected(tracker.analysis_id())));
        let mut transport = MockAnalysisTransport::new();
        transport.expect_send_analyze_request().never();
        let (_runtime, service) = service(registrar, transport);

        let error = analyze(&service).unwrap_err();

        assert!(matches!(error, BridgeError::RegistrationRejected { .. }));
    }
}
