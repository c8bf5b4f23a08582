use std::sync::Arc;
use reqwest::Url;
use crate::config::constants::{HTML_LANGUAGE_KEY, SENSOR_NAME};
use crate::enums::language::Language;
use crate::errors::{BridgeError, BridgeResult};
use crate::services::analysis_properties_provider::AnalysisPropertiesProvider;
use crate::services::instance_configuration_provider::InstanceConfigurationProvider;
use crate::services::remote_analysis_service::RemoteAnalysisService;
use crate::structs::host::active_rule::ActiveRule;
use crate::structs::host::input_file::InputFile;
use crate::structs::host::new_issue::{IssueLocation, NewIssue};
use crate::structs::host::rule_key::RuleKey;
use crate::structs::host::sensor_descriptor::SensorDescriptor;
use crate::structs::host::text_range::TextRange;
use crate::structs::protocol::roslyn_issue::RoslynIssue;
use crate::structs::protocol::roslyn_issue_location::RoslynIssueLocation;
use crate::traits::sensor_context::SensorContext;

/// Sends the C# and VB.NET files of a scan to the analyzer and reports what it finds.
pub struct RoslynSensor {
    instance_configuration_provider: InstanceConfigurationProvider,
    remote_analysis_service: Arc<RemoteAnalysisService>,
}

impl RoslynSensor {
    pub fn new(
        instance_configuration_provider: InstanceConfigurationProvider,
        remote_analysis_service: Arc<RemoteAnalysisService>,
    ) -> Self {
        Self { instance_configuration_provider, remote_analysis_service }
    }

    pub fn describe() -> SensorDescriptor {
        SensorDescriptor {
            name: SENSOR_NAME.to_string(),
            // Razor views belong to the HTML language, so the sensor must run for it as well.
            languages: vec![
                Language::CSharp.key().to_string(),
                Language::VbNet.key().to_string(),
                HTML_LANGUAGE_KEY.to_string(),
            ],
            rule_repositories: Language::ALL.iter().map(|l| l.repository_key().to_string()).collect(),
        }
    }

    /// Returns the number of issues saved on the host.
    pub fn execute(&self, context: &dyn SensorContext) -> BridgeResult<usize> {
        let input_files: Vec<InputFile> = context
            .input_files()
            .into_iter()
            .filter(Self::is_roslyn_language_or_razor_file)
            .collect();
        if input_files.is_empty() {
            log::debug!("No C# or VB.NET files to analyze");
            return Ok(0);
        }

        let all_rules = context.active_rules();
        let active_rules = Self::roslyn_active_rules(&all_rules);
        let settings = context.settings();
        let analysis_properties = AnalysisPropertiesProvider::analysis_properties(&settings);
        let file_uris: Vec<String> = input_files.iter().map(|file| file.uri.to_string()).collect();

        let roslyn_issues = self.remote_analysis_service.analyze(
            &file_uris,
            &active_rules,
            &analysis_properties,
            self.instance_configuration_provider.analyzer_info(),
        )?;

        let mut saved = 0;
        for roslyn_issue in &roslyn_issues {
            match Self::handle(roslyn_issue, &all_rules, &input_files) {
                Ok(Some(issue)) => {
                    context.save_issue(issue);
                    saved += 1;
                }
                Ok(None) => {}
                Err(e) => log::error!("{}", BridgeError::mapping_error(&roslyn_issue.rule_id, &e.to_string())),
            }
        }

        log::info!("✅ Saved {} of {} reported issues", saved, roslyn_issues.len());
        Ok(saved)
    }

    fn is_roslyn_language_or_razor_file(file: &InputFile) -> bool {
        let is_roslyn_language = file
            .language
            .as_deref()
            .map(|key| Language::from_key(key).is_some())
            .unwrap_or(false);
        let is_razor_file = file
            .extension()
            .map(|ext| Language::ALL.iter().any(|l| ext.eq_ignore_ascii_case(l.razor_extension())))
            .unwrap_or(false);

        is_roslyn_language || is_razor_file
    }

    fn roslyn_active_rules(rules: &[ActiveRule]) -> Vec<ActiveRule> {
        Language::ALL
            .iter()
            .flat_map(|language| {
                rules
                    .iter()
                    .filter(move |rule| rule.rule_key.repository == language.repository_key())
                    .cloned()
            })
            .collect()
    }

    /// `Ok(None)` when the rule is not active or the primary file is not part of the scan.
    fn handle(
        roslyn_issue: &RoslynIssue,
        active_rules: &[ActiveRule],
        input_files: &[InputFile],
    ) -> BridgeResult<Option<NewIssue>> {
        let rule_key: RuleKey = roslyn_issue.rule_id.parse()?;
        if !active_rules.iter().any(|rule| rule.rule_key == rule_key) {
            return Ok(None);
        }

        let primary = roslyn_issue.primary_location.as_ref().ok_or_else(|| BridgeError::ParseError {
            content_type: "issue".to_string(),
            line_number: None,
            reason: "no primary location".to_string(),
        })?;
        let Some(primary_location) = Self::create_location(primary, input_files)? else {
            return Ok(None);
        };

        let mut new_issue = NewIssue::new(rule_key, primary_location);
        for flow in &roslyn_issue.flows {
            for flow_location in &flow.locations {
                if let Some(location) = Self::create_location(flow_location, input_files)? {
                    new_issue.add_location(location);
                }
            }
        }
        for quick_fix in &roslyn_issue.quick_fixes {
            new_issue.add_quick_fix(&quick_fix.value);
        }

        Ok(Some(new_issue))
    }

    fn create_location(location: &RoslynIssueLocation, input_files: &[InputFile]) -> BridgeResult<Option<IssueLocation>> {
        let file_uri = Url::parse(&location.file_uri).map_err(|e| BridgeError::ParseError {
            content_type: "file URI".to_string(),
            line_number: None,
            reason: format!("'{}': {}", location.file_uri, e),
        })?;
        let Some(input_file) = input_files.iter().find(|file| file.uri == file_uri) else {
            return Ok(None);
        };

        let range = &location.text_range;
        let text_range = TextRange::new(range.start_line, range.start_line_offset, range.end_line, range.end_line_offset)?;

        Ok(Some(IssueLocation {
            file_uri: input_file.uri.clone(),
            message: location.message.clone(),
            text_range,
        }))
    }
}
