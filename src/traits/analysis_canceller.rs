use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
pub trait AnalysisCanceller: Send + Sync {
    /// Fire-and-forget, failures are logged by the implementation.
    fn cancel_analysis(&self, analysis_id: Uuid);
}
