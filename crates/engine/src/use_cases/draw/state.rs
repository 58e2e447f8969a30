//! Mutable session state owned by the draw orchestrator.

use luckydraw_domain::{CustomPoolInput, LotteryTypeDefinition, Zone, ZonePair};

use super::types::{DrawOutcome, DrawPhase};

/// Per-zone user input and results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ZoneInput {
    pub custom_count: String,
    pub custom_range: CustomPoolInput,
    pub selected: Vec<u32>,
}

/// All state of one user session.
///
/// `selected` numbers are cleared whenever the lottery type, a custom count
/// or a custom range changes, so results never outlive their configuration.
#[derive(Debug, Clone)]
pub(crate) struct SessionState {
    pub definition: LotteryTypeDefinition,
    pub zones: ZonePair<ZoneInput>,
    pub phase: DrawPhase,
    pub last_message: Option<String>,
    pub last_outcome: Option<DrawOutcome>,
}

impl SessionState {
    pub fn new(definition: LotteryTypeDefinition) -> Self {
        Self {
            definition,
            zones: ZonePair::default(),
            phase: DrawPhase::Idle,
            last_message: None,
            last_outcome: None,
        }
    }

    /// Switch lottery type, dropping every custom input and result.
    pub fn reset_for(&mut self, definition: LotteryTypeDefinition) {
        self.definition = definition;
        self.zones = ZonePair::default();
        self.last_outcome = None;
    }

    pub fn clear_results(&mut self) {
        for zone in Zone::ALL {
            self.zones[zone].selected.clear();
        }
        self.last_outcome = None;
    }

    /// Store a committed draw in both zones at once.
    pub fn commit(&mut self, outcome: DrawOutcome) {
        for zone in Zone::ALL {
            self.zones[zone].selected = outcome.numbers[zone].clone();
        }
        self.last_outcome = Some(outcome);
    }

    pub fn is_animating(&self) -> bool {
        self.phase == DrawPhase::Animating
    }
}
