use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::errors::BridgeResult;
use crate::structs::host::active_rule::ActiveRule;
use crate::structs::host::rule_key::RuleKey;

/// One `[[rules]]` entry, keyed `repository:rule`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub key: String,

    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl RuleConfig {
    pub fn to_active_rule(&self) -> BridgeResult<ActiveRule> {
        let rule_key: RuleKey = self.key.parse()?;
        Ok(ActiveRule {
            rule_key,
            params: self.params.clone(),
        })
    }
}
