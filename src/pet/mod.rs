pub mod mood;
pub mod rng;
pub mod rules;

pub use self::mood::Mood;
pub use self::rng::DecaySource;
pub use self::rules::Rules;

use self::rules::{lower, raise};

/// What happened during a single `Pet::tick`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// New level, if the pet levelled up this tick.
    pub leveled_up: Option<u32>,
    /// True only on the tick where health hit zero.
    pub died: bool,
}

/// The pet's vital statistics.
///
/// Bounded stats live in `[0, 100]`. `mood` is recomputed after every
/// mutation, and once the pet dies nothing changes again.
#[derive(Debug, Clone)]
pub struct Pet {
    name: String,
    energy: u8,
    happiness: u8,
    health: u8,
    alive: bool,
    mood: Mood,
    level: u32,
    xp: u32,
    rules: Rules,
}

impl Pet {
    /// Adopt a new pet with the default rule set.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_rules(name, Rules::default())
    }

    pub fn with_rules(name: impl Into<String>, rules: Rules) -> Self {
        let mut pet = Self {
            name: name.into(),
            energy: rules.initial_energy.min(rules::STAT_MAX),
            happiness: rules.initial_happiness.min(rules::STAT_MAX),
            health: rules.initial_health.min(rules::STAT_MAX),
            alive: true,
            mood: Mood::Neutral,
            level: 1,
            xp: 0,
            rules,
        };
        pet.update_mood();
        pet
    }

    /// Advance one time step.
    pub fn tick(&mut self, rng: &mut impl DecaySource) -> TickReport {
        let mut report = TickReport::default();
        if !self.alive {
            return report;
        }

        self.happiness = raise(self.happiness, rng.roll(self.rules.happiness_drift.clone()));
        self.energy = lower(self.energy, rng.roll(self.rules.energy_decay.clone()));

        if self.energy <= self.rules.critical_energy {
            self.health = lower(self.health, rng.roll(self.rules.health_damage.clone()));
        }

        if self.health == 0 {
            self.alive = false;
            report.died = true;
        }

        // The fatal tick still counts towards XP.
        self.xp += 1;
        if self.xp >= self.rules.xp_threshold(self.level) {
            report.leveled_up = Some(self.level_up());
        }

        self.update_mood();
        report
    }

    /// Feed the pet. `None` if it has already died.
    pub fn feed(&mut self) -> Option<String> {
        if !self.alive {
            return None;
        }
        self.energy = raise(self.energy, self.rules.feed_energy);
        self.happiness = raise(self.happiness, self.rules.feed_happiness);
        self.update_mood();
        Some(format!("You fed {}. They look happier!", self.name))
    }

    /// Play with the pet. `None` if it has already died.
    pub fn play(&mut self) -> Option<String> {
        if !self.alive {
            return None;
        }
        self.happiness = raise(self.happiness, self.rules.play_happiness);
        self.energy = lower(self.energy, self.rules.play_energy_cost);
        self.update_mood();
        Some(format!("You played with {}. They had fun!", self.name))
    }

    fn level_up(&mut self) -> u32 {
        self.level += 1;
        self.xp = 0;
        self.level
    }

    fn update_mood(&mut self) {
        self.mood = Mood::classify(&self.rules, self.energy, self.happiness, self.health);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn energy(&self) -> u8 {
        self.energy
    }

    pub fn happiness(&self) -> u8 {
        self.happiness
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mood computed from the stats, ignoring death.
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Mood to show on screen: `Dead` overrides everything once terminal.
    pub fn display_mood(&self) -> Mood {
        if self.alive {
            self.mood
        } else {
            Mood::Dead
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// XP needed to reach the next level.
    pub fn xp_to_next_level(&self) -> u32 {
        self.rules.xp_threshold(self.level)
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}
