use std::ops::RangeInclusive;

/// Upper bound for every vital stat.
pub const STAT_MAX: u8 = 100;

/// Starting energy for a freshly adopted pet.
const INITIAL_ENERGY: u8 = 100;
/// Starting happiness.
const INITIAL_HAPPINESS: u8 = 50;
/// Starting health.
const INITIAL_HEALTH: u8 = 100;

/// Passive happiness growth per tick.
const HAPPINESS_DRIFT: RangeInclusive<u8> = 1..=2;
/// Energy lost per tick.
const ENERGY_DECAY: RangeInclusive<u8> = 0..=1;
/// Health lost per tick while energy is critical.
const HEALTH_DAMAGE: RangeInclusive<u8> = 1..=2;
/// Energy at or below this hurts health and makes the pet tired.
const CRITICAL_ENERGY: u8 = 20;

const FEED_ENERGY: u8 = 30;
const FEED_HAPPINESS: u8 = 10;
const PLAY_HAPPINESS: u8 = 20;
const PLAY_ENERGY_COST: u8 = 10;

/// Health at or below this reads as Sick.
const SICK_HEALTH: u8 = 30;
/// Happiness at or above this reads as Happy.
const HAPPY_HAPPINESS: u8 = 80;

/// XP needed per level (threshold is `XP_PER_LEVEL * level`).
const XP_PER_LEVEL: u32 = 10;

/// Tuning table for the pet's state-transition rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub initial_energy: u8,
    pub initial_happiness: u8,
    pub initial_health: u8,

    pub happiness_drift: RangeInclusive<u8>,
    pub energy_decay: RangeInclusive<u8>,
    pub health_damage: RangeInclusive<u8>,
    pub critical_energy: u8,

    pub feed_energy: u8,
    pub feed_happiness: u8,
    pub play_happiness: u8,
    pub play_energy_cost: u8,

    pub sick_health: u8,
    pub happy_happiness: u8,

    pub xp_per_level: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            initial_energy: INITIAL_ENERGY,
            initial_happiness: INITIAL_HAPPINESS,
            initial_health: INITIAL_HEALTH,
            happiness_drift: HAPPINESS_DRIFT,
            energy_decay: ENERGY_DECAY,
            health_damage: HEALTH_DAMAGE,
            critical_energy: CRITICAL_ENERGY,
            feed_energy: FEED_ENERGY,
            feed_happiness: FEED_HAPPINESS,
            play_happiness: PLAY_HAPPINESS,
            play_energy_cost: PLAY_ENERGY_COST,
            sick_health: SICK_HEALTH,
            happy_happiness: HAPPY_HAPPINESS,
            xp_per_level: XP_PER_LEVEL,
        }
    }
}

impl Rules {
    /// XP required to leave `level`.
    pub fn xp_threshold(&self, level: u32) -> u32 {
        self.xp_per_level.saturating_mul(level)
    }
}

/// Add `amount` to a stat, capped at [`STAT_MAX`].
pub fn raise(stat: u8, amount: u8) -> u8 {
    stat.saturating_add(amount).min(STAT_MAX)
}

/// Subtract `amount` from a stat, floored at zero.
pub fn lower(stat: u8, amount: u8) -> u8 {
    stat.saturating_sub(amount)
}
