use std::collections::BTreeMap;
use crate::config::constants::{SHOULD_USE_CSHARP_ENTERPRISE_KEY, SHOULD_USE_VB_ENTERPRISE_KEY};
use crate::enums::language::Language;
use crate::structs::host::settings::Settings;

const EXCLUDED_KEYS: [&str; 2] = [SHOULD_USE_CSHARP_ENTERPRISE_KEY, SHOULD_USE_VB_ENTERPRISE_KEY];

/// Collects the language settings forwarded to the analyzer with each request.
pub struct AnalysisPropertiesProvider;

impl AnalysisPropertiesProvider {
    pub fn analysis_properties(settings: &Settings) -> BTreeMap<String, String> {
        Language::ALL
            .iter()
            .flat_map(|language| settings.keys_starting_with(&language.settings_prefix()))
            .filter(|key| !EXCLUDED_KEYS.contains(&key.as_str()))
            .filter_map(|key| settings.get_string(&key).map(|value| (key.clone(), value.to_string())))
            .collect()
    }
}
