use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoslynIssueQuickFix {
    #[serde(rename = "Value", default)]
    pub value: String,
}
