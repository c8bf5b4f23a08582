use std::collections::BTreeMap;
use futures::future::{BoxFuture, FutureExt};
use reqwest::header::CONTENT_TYPE;
use uuid::Uuid;
use crate::config::constants::{
    ANALYZE_ENDPOINT, AUTH_TOKEN_HEADER, CANCEL_ENDPOINT, SERVER_HOST, SERVER_PORT_KEY, SERVER_TOKEN_KEY,
};
use crate::enums::transport_error::{TransportError, TransportResult};
use crate::errors::{BridgeError, BridgeResult};
use crate::services::http::json_request_builder::JsonRequestBuilder;
use crate::structs::host::active_rule::ActiveRule;
use crate::structs::host::settings::Settings;
use crate::structs::http::analyzer_info_dto::AnalyzerInfoDto;
use crate::structs::http::raw_response::RawResponse;
use crate::traits::analysis_transport::AnalysisTransport;

/// Where the analyzer server listens and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpoint {
    pub port: u16,
    pub token: String,
}

impl ServerEndpoint {
    pub fn new(port: u16, token: &str) -> Self {
        Self { port, token: token.to_string() }
    }

    pub fn from_settings(settings: &Settings) -> BridgeResult<Self> {
        let port = settings
            .get_string(SERVER_PORT_KEY)
            .ok_or_else(|| BridgeError::config_error("analyzer server port is not set", Some(SERVER_PORT_KEY), None))?;
        let port = port.trim().parse::<u16>().map_err(|e| {
            BridgeError::config_error(&format!("invalid analyzer server port '{}': {}", port, e), Some(SERVER_PORT_KEY), None)
        })?;
        let token = settings.get_string(SERVER_TOKEN_KEY).ok_or_else(|| {
            BridgeError::config_error(
                "analyzer server token is not set",
                Some(SERVER_TOKEN_KEY),
                Some("The token is shared with the analyzer server at startup"),
            )
        })?;

        Ok(Self::new(port, token))
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("http://{}:{}/{}", SERVER_HOST, self.port, endpoint)
    }
}

pub struct HttpClientHandler {
    endpoint: ServerEndpoint,
    json_request_builder: JsonRequestBuilder,
    blocking_client: reqwest::blocking::Client,
    client: reqwest::Client,
}

impl HttpClientHandler {
    /// Must not be called from inside an async context: the blocking client owns a runtime.
    pub fn new(endpoint: ServerEndpoint, json_request_builder: JsonRequestBuilder) -> BridgeResult<Self> {
        Ok(Self {
            endpoint,
            json_request_builder,
            blocking_client: reqwest::blocking::Client::builder().build()?,
            client: reqwest::Client::builder().build()?,
        })
    }

    pub fn create_request(&self, json_payload: String, endpoint: &str) -> reqwest::Result<reqwest::blocking::Request> {
        self.blocking_client
            .post(self.endpoint.url(endpoint))
            .header(CONTENT_TYPE, "application/json")
            .header(AUTH_TOKEN_HEADER, &self.endpoint.token)
            .body(json_payload)
            .build()
    }

    fn create_async_request(&self, json_payload: String, endpoint: &str) -> reqwest::RequestBuilder {
        self.client
            .post(self.endpoint.url(endpoint))
            .header(CONTENT_TYPE, "application/json")
            .header(AUTH_TOKEN_HEADER, &self.endpoint.token)
            .body(json_payload)
    }
}

impl AnalysisTransport for HttpClientHandler {
    fn send_analyze_request(
        &self,
        file_uris: &[String],
        active_rules: &[ActiveRule],
        analysis_properties: &BTreeMap<String, String>,
        analyzer_info: AnalyzerInfoDto,
        analysis_id: Uuid,
    ) -> TransportResult<RawResponse> {
        let json_payload = self
            .json_request_builder
            .build_analyze_body(file_uris, active_rules, analysis_properties, analyzer_info, analysis_id)
            .map_err(|e| TransportError::Request(format!("failed to serialize analyze request: {}", e)))?;
        let request = self
            .create_request(json_payload, ANALYZE_ENDPOINT)
            .map_err(TransportError::from_request)?;

        log::debug!("📤 Sending {} files to the analyzer (analysis {})", file_uris.len(), analysis_id);

        let response = self.blocking_client.execute(request).map_err(TransportError::from_request)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(TransportError::from_body)?;

        Ok(RawResponse::new(status, Some(body)))
    }

    fn send_cancel_request(&self, analysis_id: Uuid) -> BoxFuture<'static, TransportResult<RawResponse>> {
        let json_payload = match self.json_request_builder.build_cancel_body(analysis_id) {
            Ok(json_payload) => json_payload,
            Err(e) => {
                let error = TransportError::Request(format!("failed to serialize cancel request: {}", e));
                return futures::future::ready(Err(error)).boxed();
            }
        };
        let request = self.create_async_request(json_payload, CANCEL_ENDPOINT);

        async move {
            let response = request.send().await.map_err(TransportError::from_request)?;
            Ok(RawResponse::new(response.status().as_u16(), None))
        }
        .boxed()
    }
}
