use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::BridgeError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuleKey {
    pub repository: String,
    pub rule: String,
}

impl RuleKey {
    pub fn of(repository: &str, rule: &str) -> Self {
        Self {
            repository: repository.to_string(),
            rule: rule.to_string(),
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.rule)
    }
}

impl FromStr for RuleKey {
    type Err = BridgeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.split_once(':') {
            Some((repository, rule)) if !repository.is_empty() && !rule.is_empty() => {
                Ok(Self::of(repository, rule))
            }
            _ => Err(BridgeError::ParseError {
                content_type: "rule key".to_string(),
                line_number: None,
                reason: format!("'{}' is not of the form repository:rule", value),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repository_and_rule() {
        let key: RuleKey = "csharpsquid:S100".parse().unwrap();

        assert_eq!(key, RuleKey::of("csharpsquid", "S100"));
        assert_eq!(key.to_string(), "csharpsquid:S100");
    }

    #[test]
    fn rejects_keys_without_repository() {
        assert!("S100".parse::<RuleKey>().is_err());
        assert!(":S100".parse::<RuleKey>().is_err());
        assert!("vbnet:".parse::<RuleKey>().is_err());
    }
}
