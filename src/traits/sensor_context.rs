use crate::structs::host::active_rule::ActiveRule;
use crate::structs::host::input_file::InputFile;
use crate::structs::host::new_issue::NewIssue;
use crate::structs::host::settings::Settings;

/// What the bridge needs from the hosting analysis process.
#[cfg_attr(test, mockall::automock)]
pub trait SensorContext: Send + Sync {
    /// Whether the host has cancelled the overall scan.
    fn is_cancelled(&self) -> bool;

    fn settings(&self) -> Settings;

    fn input_files(&self) -> Vec<InputFile>;

    fn active_rules(&self) -> Vec<ActiveRule>;

    fn save_issue(&self, issue: NewIssue);
}
