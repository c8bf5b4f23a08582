use serde::{Deserialize, Serialize};
use crate::config::constants::{
    SERVER_PORT_KEY, SERVER_TOKEN_KEY, SHOULD_USE_CSHARP_ENTERPRISE_KEY, SHOULD_USE_VB_ENTERPRISE_KEY,
};
use crate::enums::language::Language;
use crate::errors::BridgeResult;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::config::poller_config::PollerConfig;
use crate::structs::config::rule_config::RuleConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::host::active_rule::ActiveRule;
use crate::structs::host::settings::Settings;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub poller: PollerConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl Config {
    /// Flattens the file into the key/value settings the host would hand to the bridge.
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::new();

        for (key, value) in &self.analysis.properties {
            settings.set_property(key, value);
        }

        settings
            .set_property(SERVER_PORT_KEY, &self.server.port.to_string())
            .set_property(SERVER_TOKEN_KEY, &self.server.token)
            .set_property(SHOULD_USE_CSHARP_ENTERPRISE_KEY, &self.analysis.csharp_enterprise.to_string())
            .set_property(SHOULD_USE_VB_ENTERPRISE_KEY, &self.analysis.vb_enterprise.to_string());

        let suffixes = [
            (Language::CSharp, &self.analysis.csharp_suffixes),
            (Language::VbNet, &self.analysis.vb_suffixes),
        ];
        for (language, suffixes) in suffixes {
            if let Some(suffixes) = suffixes {
                settings.set_property(&language.file_suffixes_key(), &suffixes.join(","));
            }
        }

        settings
    }

    pub fn active_rules(&self) -> BridgeResult<Vec<ActiveRule>> {
        self.rules.iter().map(RuleConfig::to_active_rule).collect()
    }
}
