use serde::{Deserialize, Serialize};
use crate::structs::protocol::roslyn_issue::RoslynIssue;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponseDto {
    #[serde(rename = "RoslynIssues", default)]
    pub roslyn_issues: Vec<RoslynIssue>,
}
