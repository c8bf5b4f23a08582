use std::sync::Arc;
use roslyn_bridge::adapters::local_sensor_context::LocalSensorContext;
use roslyn_bridge::services::http::http_client_handler::{HttpClientHandler, ServerEndpoint};
use roslyn_bridge::services::http::json_request_builder::JsonRequestBuilder;
use roslyn_bridge::structs::host::active_rule::ActiveRule;
use roslyn_bridge::structs::host::rule_key::RuleKey;
use roslyn_bridge::structs::host::settings::Settings;
use serde_json::Value;
use uuid::Uuid;
use wiremock::{MockServer, Request};

pub const TOKEN: &str = "test-token";

/// Must be called from a thread where blocking is allowed.
pub fn client_for(server_port: u16) -> HttpClientHandler {
    HttpClientHandler::new(ServerEndpoint::new(server_port, TOKEN), JsonRequestBuilder::new()).unwrap()
}

pub fn host() -> Arc<LocalSensorContext> {
    let rules = vec![ActiveRule::new(RuleKey::of("csharpsquid", "S100"))];
    Arc::new(LocalSensorContext::new(Settings::new(), Vec::new(), rules))
}

pub async fn requests_to(server: &MockServer, endpoint: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() == endpoint)
        .collect()
}

pub fn analysis_id_of(request: &Request) -> Uuid {
    let body: Value = request.body_json().unwrap();
    body["AnalysisId"].as_str().unwrap().parse().unwrap()
}
