use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequestDto {
    #[serde(rename = "AnalysisId")]
    pub analysis_id: Uuid,
}
