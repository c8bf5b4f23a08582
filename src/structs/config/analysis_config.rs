use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Forwarded to the analyzer when the key belongs to one of the languages.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,

    #[serde(default = "ConfigHelper::default_enterprise")]
    pub csharp_enterprise: bool,

    #[serde(default = "ConfigHelper::default_enterprise")]
    pub vb_enterprise: bool,

    #[serde(default)]
    pub csharp_suffixes: Option<Vec<String>>,

    #[serde(default)]
    pub vb_suffixes: Option<Vec<String>>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            properties: BTreeMap::new(),
            csharp_enterprise: ConfigHelper::default_enterprise(),
            vb_enterprise: ConfigHelper::default_enterprise(),
            csharp_suffixes: None,
            vb_suffixes: None,
        }
    }
}
