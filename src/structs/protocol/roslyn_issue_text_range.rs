use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoslynIssueTextRange {
    #[serde(rename = "StartLine", default)]
    pub start_line: u32,

    #[serde(rename = "EndLine", default)]
    pub end_line: u32,

    #[serde(rename = "StartLineOffset", default)]
    pub start_line_offset: u32,

    #[serde(rename = "EndLineOffset", default)]
    pub end_line_offset: u32,
}
