use reqwest::Url;
use crate::structs::host::rule_key::RuleKey;
use crate::structs::host::text_range::TextRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLocation {
    pub file_uri: Url,
    pub message: String,
    pub text_range: TextRange,
}

/// Host-native diagnostic built from one analyzer issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub rule_key: RuleKey,
    pub primary_location: IssueLocation,
    pub secondary_locations: Vec<IssueLocation>,
    pub quick_fixes: Vec<String>,
}

impl NewIssue {
    pub fn new(rule_key: RuleKey, primary_location: IssueLocation) -> Self {
        Self {
            rule_key,
            primary_location,
            secondary_locations: Vec::new(),
            quick_fixes: Vec::new(),
        }
    }

    pub fn add_location(&mut self, location: IssueLocation) -> &mut Self {
        self.secondary_locations.push(location);
        self
    }

    /// Quick fixes are resolved lazily by the client, only the value travels here.
    pub fn add_quick_fix(&mut self, value: &str) -> &mut Self {
        self.quick_fixes.push(value.to_string());
        self
    }
}
