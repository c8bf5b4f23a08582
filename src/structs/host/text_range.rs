use crate::errors::{BridgeError, BridgeResult};

/// Validated line/offset span inside an input file. Lines are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start_line: u32,
    pub start_line_offset: u32,
    pub end_line: u32,
    pub end_line_offset: u32,
}

impl TextRange {
    pub fn new(start_line: u32, start_line_offset: u32, end_line: u32, end_line_offset: u32) -> BridgeResult<Self> {
        if start_line == 0 || end_line == 0 {
            return Err(BridgeError::ParseError {
                content_type: "text range".to_string(),
                line_number: None,
                reason: format!("line numbers start at 1, got {}..{}", start_line, end_line),
            });
        }

        if (end_line, end_line_offset) < (start_line, start_line_offset) {
            return Err(BridgeError::ParseError {
                content_type: "text range".to_string(),
                line_number: Some(start_line as usize),
                reason: format!(
                    "start pointer {}:{} should be before end pointer {}:{}",
                    start_line, start_line_offset, end_line, end_line_offset
                ),
            });
        }

        Ok(Self { start_line, start_line_offset, end_line, end_line_offset })
    }
}
