//! Draw session types shared with the presentation layer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use luckydraw_domain::{LotteryTypeId, NumberPool, Zone, ZoneConfig, ZonePair};

/// Orchestrator state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawPhase {
    Idle,
    Animating,
}

/// Results of one committed draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawOutcome {
    pub draw_id: Uuid,
    pub drawn_at: DateTime<Utc>,
    pub lottery_type_id: LotteryTypeId,
    /// Ascending numbers per zone
    pub numbers: ZonePair<Vec<u32>>,
}

/// Everything the presentation layer renders for one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneView {
    pub zone: Zone,
    pub config: ZoneConfig,
    /// Raw count override text
    pub custom_count: String,
    /// Effective pick count (override or default), not yet validated
    pub resolved_count: i64,
    /// Raw custom pool text
    pub custom_range: String,
    /// Parsed custom pool (empty when unset)
    pub custom_pool: NumberPool,
    pub range_valid: bool,
    pub range_error: Option<String>,
    /// Results of the last draw, ascending; empty before any draw
    pub selected_numbers: Vec<u32>,
    /// One slot per resolved pick, filled with drawn numbers in order
    pub slots: Vec<Option<u32>>,
}

/// Full read-only view of a draw session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawSnapshot {
    pub lottery_type_id: LotteryTypeId,
    pub lottery_name: String,
    pub description: String,
    pub phase: DrawPhase,
    pub is_animating: bool,
    pub zones: ZonePair<ZoneView>,
    /// Blocking message from the last failed intent
    pub last_message: Option<String>,
    /// Id and time of the draw whose results are shown
    pub last_draw_id: Option<Uuid>,
    pub last_drawn_at: Option<DateTime<Utc>>,
}

impl DrawSnapshot {
    pub fn zone(&self, zone: Zone) -> &ZoneView {
        &self.zones[zone]
    }
}

/// Display slots for a zone: `count` positions (capped at `max_count`),
/// each holding the drawn number at that position if any. A zero count shows
/// the zone's default number of slots.
pub(crate) fn result_slots(
    selected: &[u32],
    resolved_count: i64,
    config: &ZoneConfig,
) -> Vec<Option<u32>> {
    let count = if resolved_count == 0 {
        i64::from(config.default_count)
    } else {
        resolved_count
    };
    let len = count.clamp(0, i64::from(config.max_count));
    (0..len)
        .map(|i| usize::try_from(i).ok().and_then(|i| selected.get(i).copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use luckydraw_domain::NumberRange;

    use super::*;

    fn zone(default_count: u32, max_count: u32) -> ZoneConfig {
        ZoneConfig::new("Red ball", NumberRange::new(1, 33), default_count, 1, max_count)
    }

    #[test]
    fn test_slots_before_draw_are_empty_placeholders() {
        assert_eq!(result_slots(&[], 3, &zone(6, 10)), vec![None, None, None]);
    }

    #[test]
    fn test_slots_filled_with_results() {
        assert_eq!(
            result_slots(&[4, 9], 2, &zone(6, 10)),
            vec![Some(4), Some(9)]
        );
    }

    #[test]
    fn test_slots_capped_and_floored() {
        assert_eq!(result_slots(&[], 500, &zone(1, 2)).len(), 2);
        assert!(result_slots(&[], -4, &zone(6, 10)).is_empty());
    }

    #[test]
    fn test_zero_count_shows_default_slots() {
        assert_eq!(result_slots(&[], 0, &zone(6, 10)), vec![None; 6]);
    }
}
