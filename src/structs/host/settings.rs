use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Flat key/value view of the host configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    properties: BTreeMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_property(&mut self, key: &str, value: &str) -> &mut Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_string(key).map(|value| value.trim().eq_ignore_ascii_case("true"))
    }

    /// Comma separated values, trimmed, empty entries dropped.
    pub fn get_string_array(&self, key: &str) -> Option<Vec<String>> {
        self.get_string(key).map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    pub fn keys_starting_with(&self, prefix: &str) -> Vec<String> {
        self.properties
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_array_is_trimmed() {
        let settings: Settings = [("suffixes", ".vb, .vbnet ,")].into_iter().collect();

        assert_eq!(settings.get_string_array("suffixes"), Some(vec![".vb".to_string(), ".vbnet".to_string()]));
    }

    #[test]
    fn bool_parsing_defaults_to_false_for_garbage() {
        let settings: Settings = [("a", "TRUE"), ("b", "yes")].into_iter().collect();

        assert_eq!(settings.get_bool("a"), Some(true));
        assert_eq!(settings.get_bool("b"), Some(false));
        assert_eq!(settings.get_bool("missing"), None);
    }

    #[test]
    fn keys_are_filtered_by_prefix() {
        let settings: Settings = [("sonar.cs.a", "1"), ("sonar.csv", "2"), ("other", "3")].into_iter().collect();

        assert_eq!(settings.keys_starting_with("sonar.cs"), vec!["sonar.cs.a".to_string(), "sonar.csv".to_string()]);
    }
}
