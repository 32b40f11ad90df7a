//! Dashboard Aggregator
//!
//! Produces and keeps current a [`StatisticsSnapshot`] by fetching the three
//! statistics sources concurrently, and runs admin commands against the
//! backend under per-command in-flight guards.
//!
//! A refresh is all-or-nothing: either every source settles successfully and
//! the snapshot is replaced atomically, or the state becomes `Failed` and no
//! partial data is ever exposed. Overlapping refreshes are resolved by a
//! generation counter: only the most recently issued refresh commits.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex, RwLock};

use crate::api::{
    AdminOutcome, AppointmentStatistics, BackendApi, BackendError, DoctorStatistics,
    PatientStatistics,
};
use crate::dashboard::messages::{DashboardEvent, Notice, NoticeLevel};
use crate::dashboard::snapshot::{FetchState, StatisticsSnapshot};

/// Capacity of the event broadcast channel
const EVENT_CAPACITY: usize = 64;

/// Stage of the destructive clear-database command.
///
/// The backend request is only reachable from `AwaitingConfirmation`, so a
/// clear can never be issued as a single accidental action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearStage {
    #[default]
    Idle,
    /// A clear has been requested and awaits explicit confirmation
    AwaitingConfirmation,
    /// The backend request is in flight
    Running,
}

/// Errors surfaced by admin commands
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Command already running")]
    AlreadyRunning,

    #[error("Confirmation required")]
    ConfirmationRequired,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Authoritative fetch state plus the retained last-good snapshot
struct Slots {
    fetch: FetchState,
    last_good: Option<Arc<StatisticsSnapshot>>,
}

impl Default for Slots {
    fn default() -> Self {
        Self {
            fetch: FetchState::Idle,
            last_good: None,
        }
    }
}

/// Owns the dashboard's fetch state and admin command guards.
///
/// All mutation happens through this type's own handlers; consumers observe
/// state via [`fetch_state`](Self::fetch_state), the last-good slot, and the
/// event channel.
pub struct DashboardAggregator {
    api: Arc<dyn BackendApi>,
    slots: RwLock<Slots>,
    /// Refresh tickets; only the holder of the latest ticket commits
    generation: AtomicU64,
    seed_in_flight: AtomicBool,
    clear_stage: Mutex<ClearStage>,
    events: broadcast::Sender<DashboardEvent>,
}

impl DashboardAggregator {
    /// Create a new aggregator over the given backend
    pub fn new(api: Arc<dyn BackendApi>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            api,
            slots: RwLock::new(Slots::default()),
            generation: AtomicU64::new(0),
            seed_in_flight: AtomicBool::new(false),
            clear_stage: Mutex::new(ClearStage::Idle),
            events,
        }
    }

    /// Subscribe to fetch state transitions and notices
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }

    /// The current authoritative fetch state
    pub async fn fetch_state(&self) -> FetchState {
        self.slots.read().await.fetch.clone()
    }

    /// The most recent successful snapshot, if any.
    ///
    /// Retained across failed refreshes for stale-while-revalidate
    /// consumers; the default display contract reads [`fetch_state`]
    /// instead.
    ///
    /// [`fetch_state`]: Self::fetch_state
    pub async fn last_good(&self) -> Option<Arc<StatisticsSnapshot>> {
        self.slots.read().await.last_good.clone()
    }

    /// Re-fetch all three statistics sources and replace the snapshot.
    ///
    /// The fetches run concurrently and all outcomes are awaited; total
    /// latency is the maximum of the three, not their sum. Returns the
    /// committed state, or the current state when a newer refresh has taken
    /// ownership in the meantime.
    pub async fn refresh(&self) -> FetchState {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.begin(ticket).await;

        let (patients, doctors, appointments) = tokio::join!(
            self.api.patient_statistics(),
            self.api.doctor_statistics(),
            self.api.appointment_statistics(),
        );

        let mut slots = self.slots.write().await;

        // Last issued wins: a newer refresh owns the state now.
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "Discarding stale refresh outcome");
            return slots.fetch.clone();
        }

        let state = match combine(patients, doctors, appointments) {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                tracing::info!(
                    patients = snapshot.patients.total_patients,
                    doctors = snapshot.doctors.total_doctors,
                    appointments_today = snapshot.appointments.today,
                    "Dashboard refreshed"
                );
                slots.last_good = Some(Arc::clone(&snapshot));
                FetchState::Ready(snapshot)
            }
            Err(message) => {
                // Prior snapshot stays in last_good; only the state flips
                tracing::warn!(error = %message, "Dashboard refresh failed");
                FetchState::Failed(message)
            }
        };

        slots.fetch = state.clone();
        drop(slots);

        self.emit(DashboardEvent::FetchStateChanged(state.clone()));
        state
    }

    /// Seed the backend with sample records.
    ///
    /// Guarded by its own in-flight flag: a duplicate invocation while one
    /// is running is rejected, while the clear command stays independently
    /// available. On success the snapshot is resynchronized with one
    /// refresh; on failure only a notice is emitted and the fetch state is
    /// left alone.
    pub async fn seed_sample_data(&self) -> Result<AdminOutcome, AdminError> {
        if self
            .seed_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AdminError::AlreadyRunning);
        }

        tracing::info!("Creating sample data");
        let result = self.api.seed_sample_data().await;

        // The guard releases on every path, before any follow-up work
        self.seed_in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(outcome) => {
                self.notify(Notice::info(outcome.message.clone()));
                self.refresh().await;
                Ok(outcome)
            }
            Err(e) => {
                self.notify(Notice::error(format!("Sample data creation failed: {e}")));
                Err(AdminError::Backend(e))
            }
        }
    }

    /// Whether a seed command is currently in flight
    pub fn seed_in_flight(&self) -> bool {
        self.seed_in_flight.load(Ordering::SeqCst)
    }

    /// Stage a database clear, to be confirmed or cancelled.
    ///
    /// Rejected while a clear is already running; re-requesting while one is
    /// pending confirmation is a no-op.
    pub async fn request_clear_database(&self) -> Result<ClearStage, AdminError> {
        let mut stage = self.clear_stage.lock().await;
        if *stage == ClearStage::Running {
            return Err(AdminError::AlreadyRunning);
        }

        *stage = ClearStage::AwaitingConfirmation;
        Ok(*stage)
    }

    /// Abandon a pending clear request
    pub async fn cancel_clear_database(&self) {
        let mut stage = self.clear_stage.lock().await;
        if *stage == ClearStage::AwaitingConfirmation {
            *stage = ClearStage::Idle;
        }
    }

    /// Execute a previously requested clear.
    ///
    /// Only legal from `AwaitingConfirmation`; the stage returns to `Idle`
    /// on every exit path. Same post-success refresh and failure-notice
    /// semantics as seeding.
    pub async fn confirm_clear_database(&self) -> Result<AdminOutcome, AdminError> {
        {
            let mut stage = self.clear_stage.lock().await;
            match *stage {
                ClearStage::AwaitingConfirmation => *stage = ClearStage::Running,
                ClearStage::Running => return Err(AdminError::AlreadyRunning),
                ClearStage::Idle => return Err(AdminError::ConfirmationRequired),
            }
        }

        tracing::warn!("Clearing database");
        let result = self.api.clear_database().await;

        *self.clear_stage.lock().await = ClearStage::Idle;

        match result {
            Ok(outcome) => {
                self.notify(Notice::info(outcome.message.clone()));
                self.refresh().await;
                Ok(outcome)
            }
            Err(e) => {
                self.notify(Notice::error(format!("Database clear failed: {e}")));
                Err(AdminError::Backend(e))
            }
        }
    }

    /// Current stage of the clear-database command
    pub async fn clear_stage(&self) -> ClearStage {
        *self.clear_stage.lock().await
    }

    /// Start a background task re-running [`refresh`](Self::refresh) on the
    /// given interval.
    pub fn start_auto_refresh(self: Arc<Self>, interval_secs: u64) -> tokio::task::JoinHandle<()> {
        tracing::info!(interval_secs, "Starting dashboard auto refresh");

        tokio::spawn(async move {
            let mut ticker =
                tokio::time::interval(std::time::Duration::from_secs(interval_secs.max(1)));

            // Skip the first immediate tick
            ticker.tick().await;

            loop {
                ticker.tick().await;
                tracing::debug!("Running scheduled dashboard refresh");
                self.refresh().await;
            }
        })
    }

    /// Transition to `Loading`, unless a newer refresh already took over
    async fn begin(&self, ticket: u64) {
        let mut slots = self.slots.write().await;
        if self.generation.load(Ordering::SeqCst) == ticket {
            slots.fetch = FetchState::Loading;
            self.emit(DashboardEvent::FetchStateChanged(FetchState::Loading));
        }
    }

    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => tracing::info!(message = %notice.message, "Notice"),
            NoticeLevel::Error => tracing::warn!(message = %notice.message, "Notice"),
        }
        self.emit(DashboardEvent::Notice(notice));
    }

    fn emit(&self, event: DashboardEvent) {
        // Send only fails when nobody is subscribed
        let _ = self.events.send(event);
    }
}

/// Merge the three fetch outcomes under the all-or-nothing policy
fn combine(
    patients: Result<PatientStatistics, BackendError>,
    doctors: Result<DoctorStatistics, BackendError>,
    appointments: Result<AppointmentStatistics, BackendError>,
) -> Result<StatisticsSnapshot, String> {
    match (patients, doctors, appointments) {
        (Ok(patients), Ok(doctors), Ok(appointments)) => {
            Ok(StatisticsSnapshot::new(patients, doctors, appointments))
        }
        (patients, doctors, appointments) => {
            let mut failures = Vec::new();
            if let Err(e) = patients {
                failures.push(format!("patient statistics: {e}"));
            }
            if let Err(e) = doctors {
                failures.push(format!("doctor statistics: {e}"));
            }
            if let Err(e) = appointments {
                failures.push(format!("appointment statistics: {e}"));
            }
            Err(failures.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HealthResponse;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    /// Scripted backend: per-endpoint failure switches, call counters, and
    /// settable delays so tests can hold calls in flight under a paused
    /// clock.
    #[derive(Default)]
    struct ScriptedBackend {
        fail_patients: AtomicBool,
        fail_doctors: AtomicBool,
        fail_appointments: AtomicBool,
        fail_seed: AtomicBool,
        fail_clear: AtomicBool,
        stats_delay_ms: AtomicU64,
        admin_delay_ms: AtomicU64,
        total_patients: AtomicU64,
        refresh_calls: AtomicUsize,
        seed_calls: AtomicUsize,
        clear_calls: AtomicUsize,
    }

    impl ScriptedBackend {
        fn new() -> Self {
            let backend = Self::default();
            backend.total_patients.store(120, Ordering::SeqCst);
            backend
        }

        async fn delay(&self, ms: u64) {
            if ms > 0 {
                tokio::time::sleep(Duration::from_millis(ms)).await;
            }
        }
    }

    #[async_trait]
    impl BackendApi for ScriptedBackend {
        async fn patient_statistics(&self) -> Result<PatientStatistics, BackendError> {
            self.refresh_calls.fetch_add(1, Ordering::SeqCst);
            // Sample totals before the delay so a slow call observes the
            // values current when it was issued
            let total_patients = self.total_patients.load(Ordering::SeqCst);
            self.delay(self.stats_delay_ms.load(Ordering::SeqCst)).await;
            if self.fail_patients.load(Ordering::SeqCst) {
                return Err(BackendError::Timeout);
            }
            Ok(PatientStatistics {
                total_patients,
                new_this_month: 5,
                by_gender: HashMap::from([
                    ("female".to_string(), 64),
                    ("male".to_string(), 56),
                ]),
                by_age_group: HashMap::new(),
            })
        }

        async fn doctor_statistics(&self) -> Result<DoctorStatistics, BackendError> {
            self.delay(self.stats_delay_ms.load(Ordering::SeqCst)).await;
            if self.fail_doctors.load(Ordering::SeqCst) {
                return Err(BackendError::Unavailable);
            }
            Ok(DoctorStatistics {
                total_doctors: 10,
                available_doctors: 7,
                by_specialty: HashMap::from([("Cardiology".to_string(), 2)]),
                by_department: HashMap::new(),
                by_experience: HashMap::new(),
            })
        }

        async fn appointment_statistics(&self) -> Result<AppointmentStatistics, BackendError> {
            self.delay(self.stats_delay_ms.load(Ordering::SeqCst)).await;
            if self.fail_appointments.load(Ordering::SeqCst) {
                return Err(BackendError::Status {
                    status: 500,
                    message: "Failed to get appointment statistics".to_string(),
                });
            }
            Ok(AppointmentStatistics {
                today: 3,
                this_week: 20,
                this_month: 80,
                by_status: HashMap::from([("scheduled".to_string(), 70)]),
                by_doctor: HashMap::new(),
            })
        }

        async fn seed_sample_data(&self) -> Result<AdminOutcome, BackendError> {
            self.seed_calls.fetch_add(1, Ordering::SeqCst);
            self.delay(self.admin_delay_ms.load(Ordering::SeqCst)).await;
            if self.fail_seed.load(Ordering::SeqCst) {
                return Err(BackendError::Admin(
                    "Failed to create sample data".to_string(),
                ));
            }
            Ok(AdminOutcome {
                message: "Sample data created successfully".to_string(),
                output: None,
            })
        }

        async fn clear_database(&self) -> Result<AdminOutcome, BackendError> {
            self.clear_calls.fetch_add(1, Ordering::SeqCst);
            self.delay(self.admin_delay_ms.load(Ordering::SeqCst)).await;
            if self.fail_clear.load(Ordering::SeqCst) {
                return Err(BackendError::Admin("Failed to clear database".to_string()));
            }
            Ok(AdminOutcome {
                message: "Database cleared successfully".to_string(),
                output: None,
            })
        }

        async fn health_check(&self) -> Result<HealthResponse, BackendError> {
            Ok(HealthResponse {
                status: "healthy".to_string(),
                message: None,
                version: None,
            })
        }

        async fn database_stats(&self) -> Result<AdminOutcome, BackendError> {
            Ok(AdminOutcome {
                message: "Database stats retrieved".to_string(),
                output: Some("patients: 0".to_string()),
            })
        }
    }

    fn setup() -> (Arc<ScriptedBackend>, Arc<DashboardAggregator>) {
        let backend = Arc::new(ScriptedBackend::new());
        let aggregator = Arc::new(DashboardAggregator::new(backend.clone()));
        (backend, aggregator)
    }

    #[tokio::test]
    async fn test_refresh_merges_exact_values() {
        let (_, aggregator) = setup();

        let state = aggregator.refresh().await;
        let snapshot = state.snapshot().expect("refresh should be ready");

        assert_eq!(snapshot.patients.total_patients, 120);
        assert_eq!(snapshot.patients.new_this_month, 5);
        assert_eq!(snapshot.patients.by_gender.get("female"), Some(&64));
        assert_eq!(snapshot.doctors.total_doctors, 10);
        assert_eq!(snapshot.doctors.available_doctors, 7);
        assert_eq!(snapshot.appointments.today, 3);
        assert_eq!(snapshot.appointments.this_week, 20);
        assert_eq!(snapshot.appointments.this_month, 80);

        assert!(aggregator.fetch_state().await.is_ready());
        assert!(aggregator.last_good().await.is_some());
    }

    #[tokio::test]
    async fn test_single_failure_is_all_or_nothing() {
        let (backend, aggregator) = setup();
        backend.fail_doctors.store(true, Ordering::SeqCst);

        let state = aggregator.refresh().await;

        let message = state.error().expect("refresh should have failed");
        assert!(message.contains("doctor statistics"));
        assert!(!message.contains("patient statistics"));

        // The two successful partial results are never exposed
        assert!(state.snapshot().is_none());
        assert!(aggregator.last_good().await.is_none());
    }

    #[tokio::test]
    async fn test_failure_message_names_every_failed_source() {
        let (backend, aggregator) = setup();
        backend.fail_patients.store(true, Ordering::SeqCst);
        backend.fail_appointments.store(true, Ordering::SeqCst);

        let state = aggregator.refresh().await;
        let message = state.error().unwrap();

        assert!(message.contains("patient statistics"));
        assert!(message.contains("appointment statistics"));
    }

    #[tokio::test]
    async fn test_failed_refresh_preserves_last_good() {
        let (backend, aggregator) = setup();

        aggregator.refresh().await;
        backend.fail_patients.store(true, Ordering::SeqCst);
        let state = aggregator.refresh().await;

        assert!(state.error().is_some());
        let retained = aggregator.last_good().await.expect("last good retained");
        assert_eq!(retained.patients.total_patients, 120);
    }

    #[tokio::test]
    async fn test_refresh_emits_loading_then_ready() {
        let (_, aggregator) = setup();
        let mut events = aggregator.subscribe();

        aggregator.refresh().await;

        match events.try_recv().unwrap() {
            DashboardEvent::FetchStateChanged(state) => assert!(state.is_loading()),
            other => panic!("expected loading transition, got {:?}", other),
        }
        match events.try_recv().unwrap() {
            DashboardEvent::FetchStateChanged(state) => assert!(state.is_ready()),
            other => panic!("expected ready transition, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_good_readable_while_loading() {
        let (backend, aggregator) = setup();
        aggregator.refresh().await;

        backend.stats_delay_ms.store(50, Ordering::SeqCst);
        let pending = tokio::spawn({
            let aggregator = aggregator.clone();
            async move { aggregator.refresh().await }
        });
        tokio::task::yield_now().await;

        // Authoritative state is loading; the stale snapshot stays readable
        assert!(aggregator.fetch_state().await.is_loading());
        assert!(aggregator.last_good().await.is_some());

        assert!(pending.await.unwrap().is_ready());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_overlapping_refresh_is_discarded() {
        let (backend, aggregator) = setup();

        // First refresh is slow and observes the old totals
        backend.stats_delay_ms.store(50, Ordering::SeqCst);
        let slow = tokio::spawn({
            let aggregator = aggregator.clone();
            async move { aggregator.refresh().await }
        });
        tokio::task::yield_now().await;

        // Second refresh is fast and observes the new totals
        backend.stats_delay_ms.store(0, Ordering::SeqCst);
        backend.total_patients.store(200, Ordering::SeqCst);
        let fast = aggregator.refresh().await;
        assert_eq!(fast.snapshot().unwrap().patients.total_patients, 200);

        // The slow result settles last but must not overwrite the newer one
        let slow = slow.await.unwrap();
        assert_eq!(slow.snapshot().unwrap().patients.total_patients, 200);

        let final_state = aggregator.fetch_state().await;
        assert_eq!(
            final_state.snapshot().unwrap().patients.total_patients,
            200
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_seed_rejected_while_in_flight() {
        let (backend, aggregator) = setup();
        backend.admin_delay_ms.store(50, Ordering::SeqCst);

        let first = tokio::spawn({
            let aggregator = aggregator.clone();
            async move { aggregator.seed_sample_data().await }
        });
        tokio::task::yield_now().await;

        assert!(aggregator.seed_in_flight());
        let second = aggregator.seed_sample_data().await;
        assert!(matches!(second, Err(AdminError::AlreadyRunning)));

        assert!(first.await.unwrap().is_ok());
        assert_eq!(backend.seed_calls.load(Ordering::SeqCst), 1);
        // Exactly one refresh follows the successful seed
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);

        // After completion a new seed is accepted again
        assert!(aggregator.seed_sample_data().await.is_ok());
        assert_eq!(backend.seed_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_seed_leaves_fetch_state_alone() {
        let (backend, aggregator) = setup();
        aggregator.refresh().await;

        backend.fail_seed.store(true, Ordering::SeqCst);
        let mut events = aggregator.subscribe();

        let result = aggregator.seed_sample_data().await;
        assert!(matches!(result, Err(AdminError::Backend(_))));

        // FetchState undisturbed, no follow-up refresh, guard released
        assert!(aggregator.fetch_state().await.is_ready());
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);
        assert!(!aggregator.seed_in_flight());

        match events.try_recv().unwrap() {
            DashboardEvent::Notice(notice) => {
                assert_eq!(notice.level, NoticeLevel::Error);
                assert!(notice.message.contains("Sample data creation failed"));
            }
            other => panic!("expected notice, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_clear_never_runs_without_confirmation() {
        let (backend, aggregator) = setup();

        let result = aggregator.confirm_clear_database().await;
        assert!(matches!(result, Err(AdminError::ConfirmationRequired)));
        assert_eq!(backend.clear_calls.load(Ordering::SeqCst), 0);

        // Cancelling a pending request also keeps the backend untouched
        aggregator.request_clear_database().await.unwrap();
        assert_eq!(
            aggregator.clear_stage().await,
            ClearStage::AwaitingConfirmation
        );
        aggregator.cancel_clear_database().await;
        assert_eq!(aggregator.clear_stage().await, ClearStage::Idle);

        let result = aggregator.confirm_clear_database().await;
        assert!(matches!(result, Err(AdminError::ConfirmationRequired)));
        assert_eq!(backend.clear_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_confirmed_clear_runs_and_refreshes() {
        let (backend, aggregator) = setup();

        aggregator.request_clear_database().await.unwrap();
        let outcome = aggregator.confirm_clear_database().await.unwrap();

        assert_eq!(outcome.message, "Database cleared successfully");
        assert_eq!(backend.clear_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);
        assert_eq!(aggregator.clear_stage().await, ClearStage::Idle);
    }

    #[tokio::test]
    async fn test_failed_clear_resets_stage_without_refresh() {
        let (backend, aggregator) = setup();
        backend.fail_clear.store(true, Ordering::SeqCst);

        aggregator.request_clear_database().await.unwrap();
        let result = aggregator.confirm_clear_database().await;

        assert!(matches!(result, Err(AdminError::Backend(_))));
        assert_eq!(aggregator.clear_stage().await, ClearStage::Idle);
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_admin_guards_are_independent() {
        let (backend, aggregator) = setup();
        backend.admin_delay_ms.store(50, Ordering::SeqCst);

        aggregator.request_clear_database().await.unwrap();
        let clear = tokio::spawn({
            let aggregator = aggregator.clone();
            async move { aggregator.confirm_clear_database().await }
        });
        tokio::task::yield_now().await;
        assert_eq!(aggregator.clear_stage().await, ClearStage::Running);

        // A second clear of the same kind is rejected while one runs
        let again = aggregator.request_clear_database().await;
        assert!(matches!(again, Err(AdminError::AlreadyRunning)));

        // Seeding is not blocked by the running clear
        let seed = aggregator.seed_sample_data().await;
        assert!(seed.is_ok());

        assert!(clear.await.unwrap().is_ok());
        assert_eq!(backend.clear_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.seed_calls.load(Ordering::SeqCst), 1);
    }
}
