//! Power plant simulation engine: pure functions, fully testable.

use tracing::debug;

use super::catalog::GeneratorKind;
use super::state::{EconomyState, BASE_DEMAND};

/// Growth applied to a generator's price after each purchase.
pub const COST_GROWTH: f64 = 1.15;

/// Share of generation that shows up as demand.
const DEMAND_PER_GENERATION: f64 = 0.8;

/// Longest frame gap credited by a single tick. Anything above is a clock jump
/// and credits nothing at all, so a tab backgrounded for 61 minutes earns
/// less than one backgrounded for 59.
pub const MAX_TICK_MS: f64 = 3_600_000.0;

/// Rebuild generation, income and demand from holdings and the multiplier.
pub fn recompute_aggregates(state: &mut EconomyState) {
    let multiplier = state.prestige_multiplier;
    let (generation, income) = state.holdings.iter().fold((0.0, 0.0), |(g, i), h| {
        let count = h.count as f64;
        (
            g + count * h.kind.power() * multiplier,
            i + count * h.kind.income() * multiplier,
        )
    });
    state.generation = generation;
    state.income = income;
    state.demand = BASE_DEMAND + (generation * DEMAND_PER_GENERATION).floor();
}

/// Clamp a frame delta to something safe to credit.
pub fn sanitize_elapsed(elapsed_ms: f64) -> f64 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0.0;
    }
    if elapsed_ms > MAX_TICK_MS {
        debug!(elapsed_ms, "discarding oversized frame delta");
        return 0.0;
    }
    elapsed_ms
}

/// Advance the economy by `elapsed_ms` of wall-clock time. Returns the amount earned.
pub fn tick(state: &mut EconomyState, elapsed_ms: f64) -> f64 {
    let seconds = sanitize_elapsed(elapsed_ms) / 1000.0;
    if seconds == 0.0 {
        return 0.0;
    }
    let earned = state.income * seconds;
    state.currency += earned;
    state.lifetime_earned += earned;
    earned
}

/// Price of the unit after one at `cost`: truncated after every step.
pub fn next_cost(cost: f64) -> f64 {
    (cost * COST_GROWTH).floor()
}

/// Try to buy one generator. Returns true if successful.
pub fn buy(state: &mut EconomyState, kind: GeneratorKind) -> bool {
    if !state.can_afford(kind) {
        return false;
    }
    let holding = state.holding(kind);
    let Some(count) = holding.count.checked_add(1) else {
        debug!(?kind, "generator count at maximum");
        return false;
    };
    let cost = holding.cost;
    state.currency -= cost;
    let holding = state.holding_mut(kind);
    holding.count = count;
    holding.cost = next_cost(cost);
    recompute_aggregates(state);
    true
}

/// Format with a K/M/B suffix (e.g. 1234 → "1.2K"); plain floored integer below 1000.
pub fn format_number(n: f64) -> String {
    if n >= 1e9 {
        format!("{:.1}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.1}K", n / 1e3)
    } else {
        format!("{}", n.floor())
    }
}
