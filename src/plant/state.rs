/// Power plant economy state definitions.

use super::catalog::GeneratorKind;

/// Currency a new game (and every prestige reset) starts with.
pub const STARTING_CURRENCY: f64 = 10.0;

/// Demand floor before any generation is built.
pub const BASE_DEMAND: f64 = 50.0;

/// Multiplier gained per prestige level.
pub const MULTIPLIER_PER_LEVEL: f64 = 0.25;

/// Ownership of one generator kind.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorHolding {
    pub kind: GeneratorKind,
    pub count: u32,
    /// Price of the next unit. Always an integer value, never below base cost.
    pub cost: f64,
}

impl GeneratorHolding {
    pub fn new(kind: GeneratorKind) -> Self {
        Self {
            kind,
            count: 0,
            cost: kind.base_cost(),
        }
    }

    /// Back to zero units at the catalog price.
    pub fn reset(&mut self) {
        self.count = 0;
        self.cost = self.kind.base_cost();
    }
}

/// Full simulation state of one save slot.
#[derive(Clone, Debug, PartialEq)]
pub struct EconomyState {
    /// Spendable balance.
    pub currency: f64,
    /// Everything earned by ticking since the last prestige.
    pub lifetime_earned: f64,
    /// Derived: Σ count × power × multiplier.
    pub generation: f64,
    /// Derived: 50 + ⌊0.8 × generation⌋.
    pub demand: f64,
    /// Derived: Σ count × income × multiplier, per second.
    pub income: f64,
    pub prestige_level: u64,
    /// Derived: 1 + 0.25 × prestige_level.
    pub prestige_multiplier: f64,
    /// One holding per catalog kind, in [`GeneratorKind::all`] order.
    pub holdings: Vec<GeneratorHolding>,
}

impl Default for EconomyState {
    fn default() -> Self {
        Self::new()
    }
}

impl EconomyState {
    pub fn new() -> Self {
        Self {
            currency: STARTING_CURRENCY,
            lifetime_earned: 0.0,
            generation: 0.0,
            demand: BASE_DEMAND,
            income: 0.0,
            prestige_level: 0,
            prestige_multiplier: 1.0,
            holdings: GeneratorKind::all()
                .iter()
                .map(|&k| GeneratorHolding::new(k))
                .collect(),
        }
    }

    pub fn holding(&self, kind: GeneratorKind) -> &GeneratorHolding {
        &self.holdings[kind.index()]
    }

    pub fn holding_mut(&mut self, kind: GeneratorKind) -> &mut GeneratorHolding {
        &mut self.holdings[kind.index()]
    }

    /// Multiplier implied by the current prestige level.
    pub fn multiplier_for_level(level: u64) -> f64 {
        1.0 + level as f64 * MULTIPLIER_PER_LEVEL
    }

    pub fn can_afford(&self, kind: GeneratorKind) -> bool {
        self.currency >= self.holding(kind).cost
    }

    /// Read-only view handed to the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            currency: self.currency,
            generation: self.generation,
            demand: self.demand,
            income: self.income,
            prestige_level: self.prestige_level,
            prestige_multiplier: self.prestige_multiplier,
            can_prestige: super::prestige::can_prestige(self),
            generators: self
                .holdings
                .iter()
                .map(|h| GeneratorView {
                    kind: h.kind,
                    count: h.count,
                    cost: h.cost,
                    affordable: self.can_afford(h.kind),
                })
                .collect(),
        }
    }
}

/// Display row for one generator kind.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorView {
    pub kind: GeneratorKind,
    pub count: u32,
    pub cost: f64,
    pub affordable: bool,
}

/// Everything the UI needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub currency: f64,
    pub generation: f64,
    pub demand: f64,
    pub income: f64,
    pub prestige_level: u64,
    pub prestige_multiplier: f64,
    pub can_prestige: bool,
    pub generators: Vec<GeneratorView>,
}
