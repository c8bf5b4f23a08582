use std::collections::BTreeMap;
use crate::structs::host::rule_key::RuleKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRule {
    pub rule_key: RuleKey,
    pub params: BTreeMap<String, String>,
}

impl ActiveRule {
    pub fn new(rule_key: RuleKey) -> Self {
        Self {
            rule_key,
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }
}
