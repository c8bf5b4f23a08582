use serde::{Deserialize, Serialize};
use crate::structs::protocol::roslyn_issue_location::RoslynIssueLocation;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoslynIssueFlow {
    #[serde(rename = "Locations", default)]
    pub locations: Vec<RoslynIssueLocation>,
}
