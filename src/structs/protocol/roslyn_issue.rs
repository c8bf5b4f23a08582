use serde::{Deserialize, Serialize};
use crate::structs::protocol::roslyn_issue_flow::RoslynIssueFlow;
use crate::structs::protocol::roslyn_issue_location::RoslynIssueLocation;
use crate::structs::protocol::roslyn_issue_quick_fix::RoslynIssueQuickFix;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoslynIssue {
    #[serde(rename = "RuleId", default)]
    pub rule_id: String,

    #[serde(rename = "PrimaryLocation", default)]
    pub primary_location: Option<RoslynIssueLocation>,

    #[serde(rename = "Flows", default)]
    pub flows: Vec<RoslynIssueFlow>,

    #[serde(rename = "QuickFixes", default)]
    pub quick_fixes: Vec<RoslynIssueQuickFix>,
}
