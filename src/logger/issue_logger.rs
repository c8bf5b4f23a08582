use std::collections::BTreeMap;
use std::path::Path;
use crate::structs::host::new_issue::{IssueLocation, NewIssue};

pub struct IssueLogger {}

impl IssueLogger {
    /// Prints issues grouped by file, paths shown relative to `root` when possible.
    pub fn print_issue_report(root: &Path, issues: &[NewIssue]) {
        println!("🔍 ROSLYN ANALYSIS REPORT");
        println!("========================");

        if issues.is_empty() {
            println!("✅ No issues found\n");
            return;
        }

        let mut by_file: BTreeMap<String, Vec<&NewIssue>> = BTreeMap::new();
        for issue in issues {
            by_file
                .entry(IssueLogger::display_path(root, &issue.primary_location))
                .or_default()
                .push(issue);
        }

        println!("⚠️ {} issues in {} files", issues.len(), by_file.len());

        for (file, mut file_issues) in by_file {
            file_issues.sort_by_key(|issue| (issue.primary_location.text_range.start_line, issue.primary_location.text_range.start_line_offset));

            println!("\n📄 {}", file);
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            for issue in file_issues {
                IssueLogger::print_issue(root, issue);
            }
        }
        println!();
    }

    fn print_issue(root: &Path, issue: &NewIssue) {
        let range = &issue.primary_location.text_range;
        println!("  {:>4}:{:<3} [{}] {}", range.start_line, range.start_line_offset, issue.rule_key, issue.primary_location.message);

        for location in &issue.secondary_locations {
            println!(
                "      ↳ {}:{}: {}",
                IssueLogger::display_path(root, location),
                location.text_range.start_line,
                location.message
            );
        }

        for quick_fix in &issue.quick_fixes {
            println!("      💡 {}", quick_fix);
        }
    }

    fn display_path(root: &Path, location: &IssueLocation) -> String {
        match location.file_uri.to_file_path() {
            Ok(path) => path.strip_prefix(root).unwrap_or(&path).display().to_string(),
            Err(_) => location.file_uri.to_string(),
        }
    }
}
