use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerInfoDto {
    #[serde(rename = "ShouldUseCsharpEnterprise")]
    pub should_use_csharp_enterprise: bool,

    #[serde(rename = "ShouldUseVbEnterprise")]
    pub should_use_vb_enterprise: bool,
}

impl AnalyzerInfoDto {
    pub fn new(should_use_csharp_enterprise: bool, should_use_vb_enterprise: bool) -> Self {
        Self { should_use_csharp_enterprise, should_use_vb_enterprise }
    }
}
