use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use crate::structs::host::active_rule::ActiveRule;
use crate::structs::host::input_file::InputFile;
use crate::structs::host::new_issue::NewIssue;
use crate::structs::host::settings::Settings;
use crate::traits::sensor_context::SensorContext;

/// In-process host used by the command line: files come from a directory scan,
/// rules and settings from the configuration file.
pub struct LocalSensorContext {
    settings: Settings,
    input_files: Vec<InputFile>,
    active_rules: Vec<ActiveRule>,
    cancelled: AtomicBool,
    saved_issues: Mutex<Vec<NewIssue>>,
}

impl LocalSensorContext {
    pub fn new(settings: Settings, input_files: Vec<InputFile>, active_rules: Vec<ActiveRule>) -> Self {
        Self {
            settings,
            input_files,
            active_rules,
            cancelled: AtomicBool::new(false),
            saved_issues: Mutex::new(Vec::new()),
        }
    }

    /// Marks the scan cancelled; in-flight analyses pick it up on their next poll.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            log::warn!("🛑 Scan cancelled");
        }
    }

    pub fn reported_issues(&self) -> Vec<NewIssue> {
        self.saved_issues.lock().map(|issues| issues.clone()).unwrap_or_default()
    }
}

impl SensorContext for LocalSensorContext {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    fn settings(&self) -> Settings {
        self.settings.clone()
    }

    fn input_files(&self) -> Vec<InputFile> {
        self.input_files.clone()
    }

    fn active_rules(&self) -> Vec<ActiveRule> {
        self.active_rules.clone()
    }

    fn save_issue(&self, issue: NewIssue) {
        match self.saved_issues.lock() {
            Ok(mut issues) => issues.push(issue),
            Err(poisoned) => poisoned.into_inner().push(issue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Url;
    use crate::structs::host::new_issue::IssueLocation;
    use crate::structs::host::rule_key::RuleKey;
    use crate::structs::host::text_range::TextRange;

    #[test]
    fn cancel_is_visible_to_the_host_view() {
        let context = LocalSensorContext::new(Settings::new(), Vec::new(), Vec::new());
        assert!(!context.is_cancelled());

        context.cancel();
        context.cancel();

        assert!(context.is_cancelled());
    }

    #[test]
    fn saved_issues_are_reported_in_order() {
        let context = LocalSensorContext::new(Settings::new(), Vec::new(), Vec::new());
        let location = IssueLocation {
            file_uri: Url::parse("file:///src/a.cs").unwrap(),
            message: "msg".to_string(),
            text_range: TextRange::new(1, 0, 1, 4).unwrap(),
        };

        context.save_issue(NewIssue::new(RuleKey::of("csharpsquid", "S100"), location.clone()));
        context.save_issue(NewIssue::new(RuleKey::of("csharpsquid", "S101"), location));

        let rules: Vec<_> = context.reported_issues().iter().map(|i| i.rule_key.rule.clone()).collect();
        assert_eq!(rules, vec!["S100", "S101"]);
    }
}
