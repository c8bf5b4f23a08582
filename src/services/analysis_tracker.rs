use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;
use crate::enums::poller_error::PollerError;
use crate::traits::analysis_canceller::AnalysisCanceller;
use crate::traits::analysis_registrar::AnalysisRegistrar;
use crate::traits::analysis_tracker::AnalysisTracker;
use crate::traits::sensor_context::SensorContext;

/// Cancellation state of one remote analysis run.
pub struct AnalysisTrackerImpl {
    analysis_id: Uuid,
    context: Arc<dyn SensorContext>,
    canceller: Arc<dyn AnalysisCanceller>,
    completed: AtomicBool,
    cancel_sent: AtomicBool,
}

impl AnalysisTrackerImpl {
    /// Creates a tracker with a fresh id and registers it for polling.
    pub fn start(
        context: Arc<dyn SensorContext>,
        canceller: Arc<dyn AnalysisCanceller>,
        registrar: &dyn AnalysisRegistrar,
    ) -> Result<TrackerGuard, PollerError> {
        let tracker = Arc::new(Self {
            analysis_id: Uuid::new_v4(),
            context,
            canceller,
            completed: AtomicBool::new(false),
            cancel_sent: AtomicBool::new(false),
        });

        registrar.register_analysis(tracker.clone())?;

        Ok(TrackerGuard { tracker })
    }

    pub fn close(&self) {
        self.completed.store(true, Ordering::Release);
    }

    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::Acquire)
    }
}

impl AnalysisTracker for AnalysisTrackerImpl {
    fn analysis_id(&self) -> Uuid {
        self.analysis_id
    }

    fn cancel_if_needed(&self) -> bool {
        if self.is_completed() {
            return true;
        }

        if !self.context.is_cancelled() {
            return false;
        }

        if self
            .cancel_sent
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            log::info!("🛑 Analysis {} was cancelled by the host, notifying the analyzer", self.analysis_id);
            self.canceller.cancel_analysis(self.analysis_id);
        }

        true
    }
}

/// Scope of a run. Dropping it marks the run completed, whatever the exit path.
pub struct TrackerGuard {
    tracker: Arc<AnalysisTrackerImpl>,
}

impl TrackerGuard {
    pub fn analysis_id(&self) -> Uuid {
        self.tracker.analysis_id
    }

    #[cfg(test)]
    pub fn tracker(&self) -> Arc<AnalysisTrackerImpl> {
        Arc::clone(&self.tracker)
    }
}

impl Drop for TrackerGuard {
    fn drop(&mut self) {
        self.tracker.close();
    }
}
