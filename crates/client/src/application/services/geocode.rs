//! Location suggestions: source, ordering state, and debounced engine.
//!
//! The suggestion widget has one real invariant: after input settles, the
//! displayed suggestions always correspond to the *last* submitted query,
//! never an intermediate one. [`SuggestionState`] enforces that with a
//! generation counter; [`SuggestionEngine`] wraps it with debouncing and
//! the actual source lookup so the UI component stays a thin shell.

use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::outbound::PlatformPort;
use gotogether_domain::{GeoPoint, Location};

/// Queries shorter than this never hit the source.
pub const MIN_QUERY_LEN: usize = 2;

/// Debounce applied to keystrokes before a lookup fires.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// A provider of location candidates for free-text queries.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait LocationSource: Send + Sync {
    /// Candidates whose label matches `query`, best first, bounded in size.
    async fn search(&self, query: &str) -> Vec<Location>;
}

/// Fixed candidate list standing in for a real geocoder.
///
/// A production deployment swaps this for a `LocationSource` backed by a
/// geocoding API (Google Places, Mapbox, Nominatim) in the composition
/// root; nothing above the trait can tell the difference. Lookup latency
/// is simulated so the widget's busy states behave like the real thing.
pub struct MockLocationSource {
    platform: Arc<dyn PlatformPort>,
    latency_ms: u64,
}

/// (label, lat, lng) - Rourkela-area seed data; every entry has non-zero
/// coordinates so a committed suggestion is always distinguishable from an
/// unresolved free-text location.
const MOCK_LOCATIONS: &[(&str, f64, f64)] = &[
    ("Rourkela Railway Station", 22.2270, 84.8587),
    ("NIT Rourkela Main Gate", 22.2530, 84.9070),
    ("Rourkela Steel Plant", 22.2200, 84.8690),
    ("Civil Township, Rourkela", 22.2340, 84.8450),
    ("Panposh Bus Stand, Rourkela", 22.2580, 84.8240),
    ("Sector 19 Market, Rourkela", 22.2150, 84.8820),
    ("Biju Patnaik Airport, Jharsuguda", 21.9135, 84.0504),
    ("Vedvyas Temple", 22.2740, 84.8190),
    ("Hanuman Vatika", 22.2310, 84.8610),
    ("Indira Gandhi Park", 22.2280, 84.8530),
];

impl MockLocationSource {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self {
            platform,
            latency_ms: 150,
        }
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl LocationSource for MockLocationSource {
    async fn search(&self, query: &str) -> Vec<Location> {
        self.platform.sleep_ms(self.latency_ms).await;
        let needle = query.to_lowercase();
        MOCK_LOCATIONS
            .iter()
            .filter(|(label, _, _)| label.to_lowercase().contains(&needle))
            .map(|(label, lat, lng)| {
                Location::new(GeoPoint { lat: *lat, lng: *lng }, *label)
            })
            .collect()
    }
}

/// Generation-counted suggestion state: last-submitted-query wins.
///
/// Pure and synchronous so the ordering guarantee is testable without an
/// executor. `begin` stamps each query; `apply` only accepts results for
/// the latest stamp.
#[derive(Debug, Default)]
pub struct SuggestionState {
    /// Generation of the most recently submitted query.
    latest: u64,
    /// Generation whose results are currently displayed.
    applied: u64,
    suggestions: Vec<Location>,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new input value.
    ///
    /// Returns the generation to tag the lookup with, or `None` when the
    /// query is too short - in that case the suggestion set is forced
    /// empty and no lookup may run.
    pub fn begin(&mut self, query: &str) -> Option<u64> {
        self.latest += 1;
        if query.trim().chars().count() < MIN_QUERY_LEN {
            self.applied = self.latest;
            self.suggestions.clear();
            return None;
        }
        Some(self.latest)
    }

    /// Whether `generation` is still the newest submitted query.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }

    /// Offer results for a lookup. Accepted (and displayed) only if the
    /// generation is still current; stale results are dropped.
    pub fn apply(&mut self, generation: u64, results: Vec<Location>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.applied = generation;
        self.suggestions = results;
        true
    }

    /// A lookup is in flight: newer input was submitted than applied.
    /// The previous suggestion set stays visible meanwhile.
    pub fn is_busy(&self) -> bool {
        self.applied != self.latest
    }

    pub fn suggestions(&self) -> &[Location] {
        &self.suggestions
    }
}

/// What one processed input produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// Query too short; suggestion set cleared, no lookup ran.
    Cleared,
    /// A newer input superseded this one (during debounce or lookup).
    Superseded,
    /// Results accepted and now displayed.
    Applied(Vec<Location>),
}

/// Debounced driver around [`SuggestionState`] and a [`LocationSource`].
///
/// Clonable; all clones share the same state, so concurrent `input` calls
/// from rapid typing coordinate through the generation counter.
#[derive(Clone)]
pub struct SuggestionEngine {
    platform: Arc<dyn PlatformPort>,
    source: Arc<dyn LocationSource>,
    state: Arc<Mutex<SuggestionState>>,
    debounce_ms: u64,
}

impl SuggestionEngine {
    pub fn new(platform: Arc<dyn PlatformPort>, source: Arc<dyn LocationSource>) -> Self {
        Self {
            platform,
            source,
            state: Arc::new(Mutex::new(SuggestionState::new())),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    pub fn with_debounce(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SuggestionState> {
        // A poisoned lock only means a panicked UI task; the state itself
        // is still coherent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Process one input value end to end: stamp, debounce, look up, apply.
    pub async fn input(&self, query: &str) -> SuggestionOutcome {
        let generation = match self.lock().begin(query) {
            Some(generation) => generation,
            None => return SuggestionOutcome::Cleared,
        };

        self.platform.sleep_ms(self.debounce_ms).await;
        if !self.lock().is_current(generation) {
            return SuggestionOutcome::Superseded;
        }

        let results = self.source.search(query).await;

        let mut state = self.lock();
        if state.apply(generation, results.clone()) {
            SuggestionOutcome::Applied(results)
        } else {
            SuggestionOutcome::Superseded
        }
    }

    pub fn suggestions(&self) -> Vec<Location> {
        self.lock().suggestions().to_vec()
    }

    pub fn is_busy(&self) -> bool {
        self.lock().is_busy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;

    fn mock_engine() -> SuggestionEngine {
        let platform: Arc<dyn PlatformPort> = Arc::new(MockPlatform::new());
        let source = MockLocationSource::new(Arc::clone(&platform)).with_latency(0);
        SuggestionEngine::new(platform, Arc::new(source))
    }

    /// Platform double whose sleeps really elapse, so debounce windows
    /// overlap the way they do in the app.
    struct TimedPlatform;

    impl PlatformPort for TimedPlatform {
        fn now_unix_secs(&self) -> u64 {
            0
        }
        fn now_millis(&self) -> u64 {
            0
        }
        fn sleep_ms(
            &self,
            ms: u64,
        ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + 'static>> {
            Box::pin(tokio::time::sleep(std::time::Duration::from_millis(ms)))
        }
        fn storage_save(&self, _key: &str, _value: &str) {}
        fn storage_load(&self, _key: &str) -> Option<String> {
            None
        }
        fn storage_remove(&self, _key: &str) {}
        fn log_info(&self, _msg: &str) {}
        fn log_error(&self, _msg: &str) {}
        fn log_debug(&self, _msg: &str) {}
        fn log_warn(&self, _msg: &str) {}
    }

    // ------------------------------------------------------------------
    // SuggestionState: the ordering guarantee, without an executor
    // ------------------------------------------------------------------

    fn loc(label: &str) -> Location {
        Location::new(GeoPoint { lat: 1.0, lng: 2.0 }, label)
    }

    #[test]
    fn short_queries_clear_and_never_stamp() {
        let mut state = SuggestionState::new();
        let generation = state.begin("Rourkela").expect("stamped");
        state.apply(generation, vec![loc("a")]);
        assert_eq!(state.suggestions().len(), 1);

        assert!(state.begin("R").is_none());
        assert!(state.suggestions().is_empty());
        assert!(!state.is_busy());
    }

    #[test]
    fn stale_results_are_rejected() {
        let mut state = SuggestionState::new();
        let first = state.begin("Rou").expect("stamped");
        let second = state.begin("Rourkela").expect("stamped");

        // Second query resolves first.
        assert!(state.apply(second, vec![loc("Rourkela Railway Station")]));
        // First query's results arrive late and must be dropped.
        assert!(!state.apply(first, vec![loc("Round Hill")]));

        assert_eq!(state.suggestions().len(), 1);
        assert_eq!(state.suggestions()[0].address, "Rourkela Railway Station");
    }

    #[test]
    fn busy_while_lookup_in_flight_keeps_previous_set() {
        let mut state = SuggestionState::new();
        let first = state.begin("Rour").expect("stamped");
        assert!(state.apply(first, vec![loc("a"), loc("b")]));
        assert!(!state.is_busy());

        let _second = state.begin("Rourke").expect("stamped");
        assert!(state.is_busy());
        // Previous suggestions still displayed while in flight.
        assert_eq!(state.suggestions().len(), 2);
    }

    // ------------------------------------------------------------------
    // Engine + mock source: end-to-end suggestion behavior
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn rourkela_matches_all_substring_entries_case_insensitively() {
        let engine = mock_engine();
        let outcome = engine.input("rourkela").await;

        let expected = MOCK_LOCATIONS
            .iter()
            .filter(|(label, _, _)| label.to_lowercase().contains("rourkela"))
            .count();
        assert!(expected >= 2, "seed data must contain Rourkela entries");

        match outcome {
            SuggestionOutcome::Applied(results) => {
                assert_eq!(results.len(), expected);
                for result in &results {
                    assert!(result.address.to_lowercase().contains("rourkela"));
                    assert!(result.is_resolved(), "mock entries carry real coordinates");
                }
            }
            other => panic!("expected Applied, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unmatched_query_yields_empty_set() {
        let engine = mock_engine();
        match engine.input("xq").await {
            SuggestionOutcome::Applied(results) => assert!(results.is_empty()),
            other => panic!("expected Applied, got {other:?}"),
        }
        assert!(engine.suggestions().is_empty());
    }

    #[tokio::test]
    async fn single_char_input_never_queries() {
        let engine = mock_engine();
        assert_eq!(engine.input("R").await, SuggestionOutcome::Cleared);
        assert!(engine.suggestions().is_empty());
    }

    /// Last-submitted-query wins even when the older lookup is slower.
    #[tokio::test]
    async fn settled_suggestions_match_the_last_input() {
        struct SkewedSource;

        #[async_trait::async_trait]
        impl LocationSource for SkewedSource {
            async fn search(&self, query: &str) -> Vec<Location> {
                // Older (shorter) query is the slow one.
                let delay = if query.len() < 5 { 50 } else { 5 };
                tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
                vec![loc(query)]
            }
        }

        let platform: Arc<dyn PlatformPort> = Arc::new(MockPlatform::new());
        let engine = SuggestionEngine::new(platform, Arc::new(SkewedSource));

        let (old, new) = tokio::join!(engine.input("Rou"), engine.input("Rourkela"));

        assert_eq!(old, SuggestionOutcome::Superseded);
        assert!(matches!(new, SuggestionOutcome::Applied(_)));
        assert_eq!(engine.suggestions()[0].address, "Rourkela");
        assert!(!engine.is_busy());
    }

    /// Rapid typing: intermediate values are superseded during debounce,
    /// so only the final value's lookup runs.
    #[tokio::test]
    async fn debounce_coalesces_rapid_typing() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct CountingSource(Arc<AtomicUsize>);

        #[async_trait::async_trait]
        impl LocationSource for CountingSource {
            async fn search(&self, query: &str) -> Vec<Location> {
                self.0.fetch_add(1, Ordering::SeqCst);
                vec![loc(query)]
            }
        }

        let lookups = Arc::new(AtomicUsize::new(0));
        let platform: Arc<dyn PlatformPort> = Arc::new(TimedPlatform);
        let engine = SuggestionEngine::new(platform, Arc::new(CountingSource(lookups.clone())))
            .with_debounce(20);

        // All three inputs land before any debounce window expires.
        let (a, b, c) = tokio::join!(
            engine.input("R"),
            engine.input("Ro"),
            engine.input("Rou")
        );

        assert_eq!(a, SuggestionOutcome::Cleared);
        assert_eq!(b, SuggestionOutcome::Superseded);
        assert!(matches!(c, SuggestionOutcome::Applied(_)));
        assert_eq!(lookups.load(Ordering::SeqCst), 1, "only the settled input queries");
        assert_eq!(engine.suggestions()[0].address, "Rou");
    }
}
