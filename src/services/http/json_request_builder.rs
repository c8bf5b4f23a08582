use std::collections::BTreeMap;
use uuid::Uuid;
use crate::structs::host::active_rule::ActiveRule;
use crate::structs::http::active_rule_dto::ActiveRuleDto;
use crate::structs::http::analysis_request_dto::AnalysisRequestDto;
use crate::structs::http::analyzer_info_dto::AnalyzerInfoDto;
use crate::structs::http::cancel_request_dto::CancelRequestDto;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRequestBuilder;

impl JsonRequestBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build_analyze_body(
        &self,
        file_uris: &[String],
        active_rules: &[ActiveRule],
        analysis_properties: &BTreeMap<String, String>,
        analyzer_info: AnalyzerInfoDto,
        analysis_id: Uuid,
    ) -> serde_json::Result<String> {
        let request = AnalysisRequestDto {
            file_uris: file_uris.to_vec(),
            active_rules: active_rules.iter().map(ActiveRuleDto::from).collect(),
            analysis_properties: analysis_properties.clone(),
            analyzer_info,
            analysis_id,
        };

        serde_json::to_string(&request)
    }

    pub fn build_cancel_body(&self, analysis_id: Uuid) -> serde_json::Result<String> {
        serde_json::to_string(&CancelRequestDto { analysis_id })
    }
}
