use std::fmt;
use crate::structs::protocol::roslyn_issue::RoslynIssue;

/// How an analyze reply was classified before it reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    Issues(Vec<RoslynIssue>),
    UnexpectedStatus(u16),
    NoBody,
}

impl AnalyzeOutcome {
    pub fn into_issues(self) -> Vec<RoslynIssue> {
        match self {
            Self::Issues(issues) => issues,
            Self::UnexpectedStatus(_) | Self::NoBody => Vec::new(),
        }
    }
}

impl fmt::Display for AnalyzeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Issues(issues) => write!(f, "Received {} issues from the server.", issues.len()),
            Self::UnexpectedStatus(status) => write!(f, "Response from server is {}.", status),
            Self::NoBody => write!(f, "No body received from the server."),
        }
    }
}
