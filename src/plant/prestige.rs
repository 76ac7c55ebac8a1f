//! Prestige: trade a run's lifetime earnings for a permanent income multiplier.

use tracing::info;

use super::logic::recompute_aggregates;
use super::state::{EconomyState, STARTING_CURRENCY};

/// Lifetime earnings needed before a reset is allowed.
pub const PRESTIGE_THRESHOLD: f64 = 100_000.0;

/// What confirming a prestige right now would yield.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrestigePreview {
    pub reward: u64,
    pub new_multiplier: f64,
}

pub fn can_prestige(state: &EconomyState) -> bool {
    state.lifetime_earned >= PRESTIGE_THRESHOLD
}

/// Levels gained by resetting now: ⌊√(lifetime / 100k)⌋, or 0 when not eligible.
pub fn prestige_reward(state: &EconomyState) -> u64 {
    if !can_prestige(state) {
        return 0;
    }
    (state.lifetime_earned / PRESTIGE_THRESHOLD).sqrt().floor() as u64
}

pub fn preview(state: &EconomyState) -> Option<PrestigePreview> {
    if !can_prestige(state) {
        return None;
    }
    let reward = prestige_reward(state);
    let level = state.prestige_level.saturating_add(reward);
    Some(PrestigePreview {
        reward,
        new_multiplier: EconomyState::multiplier_for_level(level),
    })
}

/// Perform the reset. Returns the levels gained, or `None` when not eligible.
pub fn do_prestige(state: &mut EconomyState) -> Option<u64> {
    if !can_prestige(state) {
        return None;
    }
    let reward = prestige_reward(state);
    state.prestige_level = state.prestige_level.saturating_add(reward);
    state.prestige_multiplier = EconomyState::multiplier_for_level(state.prestige_level);

    state.currency = STARTING_CURRENCY;
    state.lifetime_earned = 0.0;
    for holding in &mut state.holdings {
        holding.reset();
    }
    recompute_aggregates(state);

    info!(
        reward,
        level = state.prestige_level,
        multiplier = state.prestige_multiplier,
        "prestige reset"
    );
    Some(reward)
}
