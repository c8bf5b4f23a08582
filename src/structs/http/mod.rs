pub mod active_rule_dto;
pub mod analysis_request_dto;
pub mod analyzer_info_dto;
pub mod cancel_request_dto;
pub mod raw_response;
