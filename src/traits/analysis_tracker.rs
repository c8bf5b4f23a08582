use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
pub trait AnalysisTracker: Send + Sync {
    fn analysis_id(&self) -> Uuid;

    /// Returns true once the run needs no further polling.
    fn cancel_if_needed(&self) -> bool;
}
