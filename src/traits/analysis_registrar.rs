use std::sync::Arc;
use crate::enums::poller_error::PollerError;
use crate::traits::analysis_tracker::AnalysisTracker;

#[cfg_attr(test, mockall::automock)]
pub trait AnalysisRegistrar: Send + Sync {
    fn register_analysis(&self, tracker: Arc<dyn AnalysisTracker>) -> Result<(), PollerError>;
}
