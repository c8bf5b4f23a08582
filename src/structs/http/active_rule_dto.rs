use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::structs::host::active_rule::ActiveRule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRuleDto {
    #[serde(rename = "RuleId")]
    pub rule_id: String,

    #[serde(rename = "Parameters")]
    pub parameters: BTreeMap<String, String>,
}

impl From<&ActiveRule> for ActiveRuleDto {
    fn from(rule: &ActiveRule) -> Self {
        Self {
            rule_id: rule.rule_key.to_string(),
            parameters: rule.params.clone(),
        }
    }
}
