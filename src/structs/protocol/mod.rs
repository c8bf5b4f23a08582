pub mod analysis_response_dto;
pub mod roslyn_issue;
pub mod roslyn_issue_flow;
pub mod roslyn_issue_location;
pub mod roslyn_issue_quick_fix;
pub mod roslyn_issue_text_range;
