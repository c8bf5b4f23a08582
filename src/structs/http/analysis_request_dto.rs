use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::structs::http::active_rule_dto::ActiveRuleDto;
use crate::structs::http::analyzer_info_dto::AnalyzerInfoDto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequestDto {
    #[serde(rename = "FileUris")]
    pub file_uris: Vec<String>,

    #[serde(rename = "ActiveRules")]
    pub active_rules: Vec<ActiveRuleDto>,

    #[serde(rename = "AnalysisProperties")]
    pub analysis_properties: BTreeMap<String, String>,

    #[serde(rename = "AnalyzerInfo")]
    pub analyzer_info: AnalyzerInfoDto,

    #[serde(rename = "AnalysisId")]
    pub analysis_id: Uuid,
}
