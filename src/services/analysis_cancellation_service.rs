use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use dashmap::DashMap;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::time::MissedTickBehavior;
use uuid::Uuid;
use crate::config::constants::{
    poll_interval, DEFAULT_POLLER_WORKER_THREADS, DEFAULT_POLL_INTERVAL_MS, POLLER_THREAD_NAME,
};
use crate::enums::poller_error::PollerError;
use crate::traits::analysis_registrar::AnalysisRegistrar;
use crate::traits::analysis_tracker::AnalysisTracker;

/// Periodically asks every registered tracker whether its analysis must be cancelled.
///
/// Each run gets its own recurring task on a shared, fixed-size runtime, so a
/// run's checks never overlap while different runs are polled independently.
/// The task ends once the tracker reports that no further polling is needed.
pub struct AnalysisCancellationService {
    runtime: Mutex<Option<Runtime>>,
    active_analyses: Arc<DashMap<Uuid, Instant>>,
    poll_interval: Duration,
}

impl AnalysisCancellationService {
    pub fn new() -> Result<Self, PollerError> {
        Self::with_settings(DEFAULT_POLLER_WORKER_THREADS, poll_interval(DEFAULT_POLL_INTERVAL_MS))
    }

    pub fn with_settings(worker_threads: usize, poll_interval: Duration) -> Result<Self, PollerError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(worker_threads.max(1))
            .thread_name(POLLER_THREAD_NAME)
            .enable_all()
            .build()?;

        log::debug!("🕒 Cancellation poller started ({} workers, every {:?})", worker_threads.max(1), poll_interval);

        Ok(Self {
            runtime: Mutex::new(Some(runtime)),
            active_analyses: Arc::new(DashMap::new()),
            poll_interval,
        })
    }

    /// Handle of the background runtime, for work that should share its thread pool.
    pub fn handle(&self) -> Result<Handle, PollerError> {
        self.lock_runtime()
            .as_ref()
            .map(|runtime| runtime.handle().clone())
            .ok_or(PollerError::Stopped)
    }

    pub fn register_analysis(&self, tracker: Arc<dyn AnalysisTracker>) -> Result<(), PollerError> {
        let analysis_id = tracker.analysis_id();
        let runtime = self.lock_runtime();
        let Some(runtime) = runtime.as_ref() else {
            log::warn!("⛔ Rejected analysis {}: cancellation poller is stopped", analysis_id);
            return Err(PollerError::Rejected(analysis_id));
        };

        // Recorded before the task exists so the task's removal always comes last.
        self.active_analyses.insert(analysis_id, Instant::now());

        let active_analyses = Arc::clone(&self.active_analyses);
        let period = self.poll_interval;
        runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tracker.cancel_if_needed() {
                    break;
                }
            }

            if let Some((_, registered_at)) = active_analyses.remove(&analysis_id) {
                log::debug!("Stopped polling analysis {} after {:?}", analysis_id, registered_at.elapsed());
            }
        });

        log::debug!("Polling analysis {} for cancellation", analysis_id);
        Ok(())
    }

    pub fn active_analyses(&self) -> usize {
        self.active_analyses.len()
    }

    #[cfg(test)]
    pub fn is_stopped(&self) -> bool {
        self.lock_runtime().is_none()
    }

    /// Abandons all scheduled checks. Safe to call more than once.
    pub fn stop(&self) {
        let runtime = self.lock_runtime().take();
        if let Some(runtime) = runtime {
            runtime.shutdown_background();
            self.active_analyses.clear();
            log::debug!("🛑 Cancellation poller stopped");
        }
    }

    fn lock_runtime(&self) -> MutexGuard<'_, Option<Runtime>> {
        // A panic while holding the lock cannot leave the Option half-updated.
        self.runtime.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AnalysisRegistrar for AnalysisCancellationService {
    fn register_analysis(&self, tracker: Arc<dyn AnalysisTracker>) -> Result<(), PollerError> {
        AnalysisCancellationService::register_analysis(self, tracker)
    }
}

impl Drop for AnalysisCancellationService {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers true once it has been asked `finish_after` times.
    struct CountingTracker {
        id: Uuid,
        calls: AtomicUsize,
        finish_after: usize,
    }

    impl CountingTracker {
        fn new(finish_after: usize) -> Arc<Self> {
            Arc::new(Self {
                id: Uuid::new_v4(),
                calls: AtomicUsize::new(0),
                finish_after,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AnalysisTracker for CountingTracker {
        fn analysis_id(&self) -> Uuid {
            self.id
        }

        fn cancel_if_needed(&self) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst) + 1 >= self.finish_after
        }
    }

    fn wait_until(timeout: Duration, condition: impl Fn() -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        condition()
    }

    fn fast_service() -> AnalysisCancellationService {
        AnalysisCancellationService::with_settings(2, Duration::from_millis(20)).unwrap()
    }

    #[test]
    fn polls_until_tracker_reports_done() {
        let service = fast_service();
        let tracker = CountingTracker::new(3);

        service.register_analysis(tracker.clone()).unwrap();

        assert!(wait_until(Duration::from_millis(400), || tracker.calls() >= 3));
        assert!(wait_until(Duration::from_millis(200), || service.active_analyses() == 0));
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(tracker.calls(), 3);

        service.stop();
    }

    #[test]
    fn default_interval_checks_three_times_within_400ms() {
        let service = AnalysisCancellationService::new().unwrap();
        let tracker = CountingTracker::new(3);

        service.register_analysis(tracker.clone()).unwrap();

        assert!(wait_until(Duration::from_millis(400), || tracker.calls() >= 3));
        service.stop();
    }

    #[test]
    fn polls_multiple_analyses_independently() {
        let service = fast_service();
        let finished = CountingTracker::new(1);
        let running = CountingTracker::new(usize::MAX);

        service.register_analysis(finished.clone()).unwrap();
        service.register_analysis(running.clone()).unwrap();

        assert!(wait_until(Duration::from_millis(300), || running.calls() >= 5));
        assert_eq!(finished.calls(), 1);
        assert_eq!(service.active_analyses(), 1);

        service.stop();
    }

    #[test]
    fn rejects_registration_after_stop() {
        let service = fast_service();
        service.stop();
        let tracker = CountingTracker::new(usize::MAX);

        let result = service.register_analysis(tracker.clone());

        assert!(matches!(result, Err(PollerError::Rejected(id)) if id == tracker.id));
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(tracker.calls(), 0);
        assert_eq!(service.active_analyses(), 0);
    }

    #[test]
    fn stop_is_idempotent_and_abandons_checks() {
        let service = fast_service();
        let tracker = CountingTracker::new(usize::MAX);
        service.register_analysis(tracker.clone()).unwrap();
        assert!(wait_until(Duration::from_millis(200), || tracker.calls() >= 1));

        service.stop();
        service.stop();

        assert!(service.is_stopped());
        assert!(service.handle().is_err());
        std::thread::sleep(Duration::from_millis(60));
        let calls_after_stop = tracker.calls();
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(tracker.calls(), calls_after_stop);
    }

    #[test]
    fn concurrent_registrations_are_all_tracked() {
        let service = Arc::new(fast_service());
        let trackers: Vec<_> = (0..16).map(|_| CountingTracker::new(usize::MAX)).collect();

        std::thread::scope(|scope| {
            for tracker in &trackers {
                let service = Arc::clone(&service);
                let tracker = Arc::clone(tracker);
                scope.spawn(move || service.register_analysis(tracker).unwrap());
            }
        });

        assert_eq!(service.active_analyses(), 16);
        assert!(wait_until(Duration::from_millis(400), || trackers.iter().all(|t| t.calls() > 0)));
        service.stop();
    }
}
