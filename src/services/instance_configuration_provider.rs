use crate::config::constants::{SHOULD_USE_CSHARP_ENTERPRISE_KEY, SHOULD_USE_VB_ENTERPRISE_KEY};
use crate::structs::host::settings::Settings;
use crate::structs::http::analyzer_info_dto::AnalyzerInfoDto;

/// Analyzer capability flags, read once per process.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InstanceConfigurationProvider {
    should_use_csharp_enterprise: bool,
    should_use_vb_enterprise: bool,
}

impl InstanceConfigurationProvider {
    pub fn new(settings: &Settings) -> Self {
        Self {
            should_use_csharp_enterprise: settings.get_bool(SHOULD_USE_CSHARP_ENTERPRISE_KEY).unwrap_or(false),
            should_use_vb_enterprise: settings.get_bool(SHOULD_USE_VB_ENTERPRISE_KEY).unwrap_or(false),
        }
    }

    pub fn should_use_csharp_enterprise(&self) -> bool {
        self.should_use_csharp_enterprise
    }

    pub fn should_use_vb_enterprise(&self) -> bool {
        self.should_use_vb_enterprise
    }

    pub fn analyzer_info(&self) -> AnalyzerInfoDto {
        AnalyzerInfoDto::new(self.should_use_csharp_enterprise, self.should_use_vb_enterprise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_false() {
        let provider = InstanceConfigurationProvider::new(&Settings::new());

        assert!(!provider.should_use_csharp_enterprise());
        assert!(!provider.should_use_vb_enterprise());
    }

    #[test]
    fn flags_are_parsed_independently() {
        let settings: Settings = [(SHOULD_USE_CSHARP_ENTERPRISE_KEY, "true"), (SHOULD_USE_VB_ENTERPRISE_KEY, "nope")]
            .into_iter()
            .collect();

        let provider = InstanceConfigurationProvider::new(&settings);

        assert_eq!(provider.analyzer_info(), AnalyzerInfoDto::new(true, false));
    }
}
