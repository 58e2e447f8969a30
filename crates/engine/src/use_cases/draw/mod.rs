//! Draw use cases.
//!
//! `LotterySession` owns the state of one user session and sequences a draw:
//! 1. Resolve and validate both zones' pick counts
//! 2. Reject the draw if a custom pool is marked invalid
//! 3. Enter `Animating` and wait for the configured delay
//! 4. Resolve each zone's pool, check it is large enough, sample both zones
//! 5. Commit both zones' results together and return to `Idle`
//!
//! Every command takes `&mut self` and `pick_numbers` keeps that borrow across
//! its delay, so no other intent can run while a draw is animating.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use luckydraw_domain::{
    resolve_count, sample, step_count, validate_counts, CountValidationError, CustomPoolInput,
    LotteryCatalog, LotteryTypeDefinition, LotteryTypeId, NumberPool, PoolValidationError,
    SampleError, Step, Zone, ZoneConfig, ZonePair,
};

mod state;
mod types;

pub use types::{DrawOutcome, DrawPhase, DrawSnapshot, ZoneView};

use crate::infrastructure::ports::{ClockPort, DelayPort, RandomPort};
use state::SessionState;
use types::result_slots;


/// Errors that block a draw. All are shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("Unknown lottery type: {0}")]
    UnknownLotteryType(LotteryTypeId),

    #[error(transparent)]
    InvalidCount(#[from] CountValidationError),

    #[error("{zone_name} custom pool is invalid: {source}")]
    InvalidCustomPool {
        zone: Zone,
        zone_name: String,
        source: PoolValidationError,
    },

    #[error("{zone_name} pool only has {available} numbers, cannot pick {requested}")]
    PoolTooSmall {
        zone: Zone,
        zone_name: String,
        available: usize,
        requested: usize,
    },

    /// Sampler precondition violated after validation passed
    #[error("Sampling failed: {0}")]
    Sampling(#[from] SampleError),
}

impl DrawError {
    /// Message for the blocking dialog.
    pub fn user_message(&self) -> String {
        match self {
            Self::Sampling(_) => {
                "Something went wrong while picking numbers, please try again".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Ports a session depends on.
#[derive(Clone)]
pub struct DrawPorts {
    pub random: Arc<dyn RandomPort>,
    pub clock: Arc<dyn ClockPort>,
    pub delay: Arc<dyn DelayPort>,
}

/// The draw orchestrator for one user session.
pub struct LotterySession {
    catalog: Arc<LotteryCatalog>,
    ports: DrawPorts,
    animation_delay: Duration,
    state: SessionState,
    snapshots: watch::Sender<DrawSnapshot>,
}

impl LotterySession {
    /// Start a session on `initial_type` with all custom fields blank.
    pub fn new(
        catalog: Arc<LotteryCatalog>,
        initial_type: &LotteryTypeId,
        ports: DrawPorts,
        animation_delay: Duration,
    ) -> Result<Self, DrawError> {
        let definition = catalog
            .get(initial_type.as_str())
            .cloned()
            .ok_or_else(|| DrawError::UnknownLotteryType(initial_type.clone()))?;

        let state = SessionState::new(definition);
        let initial = build_snapshot(&state);
        let (snapshots, _) = watch::channel(initial);

        tracing::debug!(lottery_type = %initial_type, "Draw session started");

        Ok(Self {
            catalog,
            ports,
            animation_delay,
            state,
            snapshots,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn current_type_id(&self) -> &LotteryTypeId {
        &self.state.definition.id
    }

    pub fn definition(&self) -> &LotteryTypeDefinition {
        &self.state.definition
    }

    /// Lottery types available for selection.
    pub fn lottery_types(&self) -> &[LotteryTypeDefinition] {
        self.catalog.list()
    }

    pub fn zone_config(&self, zone: Zone) -> &ZoneConfig {
        self.state.definition.zone(zone)
    }

    pub fn custom_count(&self, zone: Zone) -> &str {
        &self.state.zones[zone].custom_count
    }

    pub fn resolved_count(&self, zone: Zone) -> i64 {
        resolve_count(self.custom_count(zone), self.zone_config(zone))
    }

    pub fn custom_range(&self, zone: Zone) -> &str {
        self.state.zones[zone].custom_range.raw()
    }

    pub fn custom_pool(&self, zone: Zone) -> &NumberPool {
        self.state.zones[zone].custom_range.pool()
    }

    pub fn range_valid(&self, zone: Zone) -> bool {
        self.state.zones[zone].custom_range.is_valid()
    }

    pub fn range_error(&self, zone: Zone) -> Option<&PoolValidationError> {
        self.state.zones[zone].custom_range.error()
    }

    pub fn selected_numbers(&self, zone: Zone) -> &[u32] {
        &self.state.zones[zone].selected
    }

    pub fn phase(&self) -> DrawPhase {
        self.state.phase
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.state.last_message.as_deref()
    }

    pub fn last_outcome(&self) -> Option<&DrawOutcome> {
        self.state.last_outcome.as_ref()
    }

    pub fn snapshot(&self) -> DrawSnapshot {
        build_snapshot(&self.state)
    }

    /// Receive a new snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<DrawSnapshot> {
        self.snapshots.subscribe()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Switch to another lottery type, resetting all custom input and results.
    ///
    /// Unknown ids are ignored; returns whether the switch happened.
    pub fn change_lottery_type(&mut self, type_id: &str) -> bool {
        let Some(definition) = self.catalog.get(type_id).cloned() else {
            tracing::warn!(lottery_type = %type_id, "Ignoring unknown lottery type");
            return false;
        };

        self.state.last_message = None;
        self.state.reset_for(definition);
        tracing::info!(lottery_type = %type_id, "Lottery type changed");
        self.publish();
        true
    }

    /// Store the raw count override text for a zone and clear results.
    pub fn update_custom_count(&mut self, zone: Zone, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(%zone, count = %text, "Custom count updated");

        self.state.last_message = None;
        self.state.zones[zone].custom_count = text;
        self.state.clear_results();
        self.publish();
    }

    /// Increment or decrement a zone's count within its limits.
    ///
    /// Returns `false` when the step would leave `[min_count, max_count]`.
    pub fn step_custom_count(&mut self, zone: Zone, step: Step) -> bool {
        match step_count(self.custom_count(zone), self.zone_config(zone), step) {
            Some(text) => {
                self.update_custom_count(zone, text);
                true
            }
            None => false,
        }
    }

    /// Parse and validate custom pool text, storing text, pool and validity
    /// together, and clear results.
    pub fn update_custom_range(&mut self, zone: Zone, text: impl Into<String>) {
        let input = CustomPoolInput::evaluate(text, self.zone_config(zone));
        tracing::debug!(
            %zone,
            pool_size = input.pool().len(),
            valid = input.is_valid(),
            "Custom range updated"
        );

        self.state.last_message = None;
        self.state.zones[zone].custom_range = input;
        self.state.clear_results();
        self.publish();
    }

    /// Run a full draw.
    ///
    /// Validation failures abort before animating. Pool and sampling failures
    /// abort after the delay without touching existing results. The session
    /// is always back in `Idle` when this returns or is dropped.
    pub async fn pick_numbers(&mut self) -> Result<DrawOutcome, DrawError> {
        self.state.last_message = None;

        let counts = match self.validated_counts() {
            Ok(counts) => counts,
            Err(e) => return Err(self.reject(e)),
        };

        let delay = Arc::clone(&self.ports.delay);
        let animation_delay = self.animation_delay;

        let result = {
            let guard = AnimatingGuard::enter(self);
            delay.sleep(animation_delay).await;
            guard.session.complete_draw(&counts)
        };

        match result {
            Ok(outcome) => {
                tracing::info!(
                    draw_id = %outcome.draw_id,
                    lottery_type = %outcome.lottery_type_id,
                    primary = ?outcome.numbers.primary,
                    secondary = ?outcome.numbers.secondary,
                    "Draw committed"
                );
                self.publish();
                Ok(outcome)
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    // =========================================================================
    // Draw steps
    // =========================================================================

    /// Resolve and validate counts, then make sure no custom pool is invalid.
    fn validated_counts(&self) -> Result<ZonePair<usize>, DrawError> {
        let resolved = ZonePair::from_fn(|zone| self.resolved_count(zone));
        validate_counts(&self.state.definition, &resolved)?;

        for zone in Zone::ALL {
            if let Some(error) = self.range_error(zone) {
                return Err(DrawError::InvalidCustomPool {
                    zone,
                    zone_name: self.zone_config(zone).name.clone(),
                    source: error.clone(),
                });
            }
        }

        // Validated counts are at least min_count, hence non-negative.
        Ok(resolved.map(|_, count| usize::try_from(count).unwrap_or_default()))
    }

    /// Custom pool if set and valid, otherwise the zone's default range.
    fn effective_pool(&self, zone: Zone) -> NumberPool {
        match self.state.zones[zone].custom_range.override_pool() {
            Some(pool) => pool.clone(),
            None => self.zone_config(zone).default_pool(),
        }
    }

    fn complete_draw(&mut self, counts: &ZonePair<usize>) -> Result<DrawOutcome, DrawError> {
        let pools = ZonePair::from_fn(|zone| self.effective_pool(zone));

        for (zone, pool) in pools.iter() {
            if pool.len() < counts[zone] {
                return Err(DrawError::PoolTooSmall {
                    zone,
                    zone_name: self.zone_config(zone).name.clone(),
                    available: pool.len(),
                    requested: counts[zone],
                });
            }
        }

        let random = Arc::clone(&self.ports.random);
        let numbers = pools.try_map(|zone, pool| {
            sample(pool.as_slice(), counts[zone], |bound| random.gen_index(bound))
        })?;

        let outcome = DrawOutcome {
            draw_id: random.gen_uuid(),
            drawn_at: self.ports.clock.now(),
            lottery_type_id: self.state.definition.id.clone(),
            numbers,
        };
        self.state.commit(outcome.clone());
        Ok(outcome)
    }

    /// Record a blocking failure and hand the error back.
    fn reject(&mut self, error: DrawError) -> DrawError {
        match &error {
            DrawError::Sampling(e) => {
                tracing::error!(error = %e, "Sampler invariant violated after validation");
            }
            other => {
                tracing::warn!(
                    lottery_type = %self.state.definition.id,
                    error = %other,
                    "Draw rejected"
                );
            }
        }
        self.state.last_message = Some(error.user_message());
        self.publish();
        error
    }

    fn publish(&self) {
        self.snapshots.send_replace(build_snapshot(&self.state));
    }
}

/// Holds the session in `Animating`; dropping it returns to `Idle`.
struct AnimatingGuard<'a> {
    session: &'a mut LotterySession,
}

impl<'a> AnimatingGuard<'a> {
    fn enter(session: &'a mut LotterySession) -> Self {
        session.state.phase = DrawPhase::Animating;
        session.publish();
        Self { session }
    }
}

impl Drop for AnimatingGuard<'_> {
    fn drop(&mut self) {
        self.session.state.phase = DrawPhase::Idle;
        self.session.publish();
    }
}

fn build_snapshot(state: &SessionState) -> DrawSnapshot {
    let definition = &state.definition;
    let zones = ZonePair::from_fn(|zone| {
        let input = &state.zones[zone];
        let config = definition.zone(zone);
        let resolved_count = resolve_count(&input.custom_count, config);
        ZoneView {
            zone,
            config: config.clone(),
            custom_count: input.custom_count.clone(),
            resolved_count,
            custom_range: input.custom_range.raw().to_string(),
            custom_pool: input.custom_range.pool().clone(),
            range_valid: input.custom_range.is_valid(),
            range_error: input.custom_range.error().map(|e| e.to_string()),
            selected_numbers: input.selected.clone(),
            slots: result_slots(&input.selected, resolved_count, config),
        }
    });

    DrawSnapshot {
        lottery_type_id: definition.id.clone(),
        lottery_name: definition.name.clone(),
        description: definition.description.clone(),
        phase: state.phase,
        is_animating: state.is_animating(),
        zones,
        last_message: state.last_message.clone(),
        last_draw_id: state.last_outcome.as_ref().map(|o| o.draw_id),
        last_drawn_at: state.last_outcome.as_ref().map(|o| o.drawn_at),
    }
}
