use std::collections::BTreeMap;
use futures::future::BoxFuture;
use uuid::Uuid;
use crate::enums::transport_error::TransportResult;
use crate::structs::host::active_rule::ActiveRule;
use crate::structs::http::analyzer_info_dto::AnalyzerInfoDto;
use crate::structs::http::raw_response::RawResponse;

#[cfg_attr(test, mockall::automock)]
pub trait AnalysisTransport: Send + Sync {
    /// Blocks the calling thread until the analyzer answers.
    fn send_analyze_request(
        &self,
        file_uris: &[String],
        active_rules: &[ActiveRule],
        analysis_properties: &BTreeMap<String, String>,
        analyzer_info: AnalyzerInfoDto,
        analysis_id: Uuid,
    ) -> TransportResult<RawResponse>;

    /// Nothing is sent until the returned future is polled.
    fn send_cancel_request(&self, analysis_id: Uuid) -> BoxFuture<'static, TransportResult<RawResponse>>;
}
