use serde::{Deserialize, Serialize};
use crate::structs::protocol::roslyn_issue_text_range::RoslynIssueTextRange;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoslynIssueLocation {
    #[serde(rename = "FileUri", default)]
    pub file_uri: String,

    #[serde(rename = "Message", default)]
    pub message: String,

    #[serde(rename = "TextRange", default)]
    pub text_range: RoslynIssueTextRange,
}
