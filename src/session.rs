use crate::anim::{AnimationState, Clip};
use crate::pet::{DecaySource, Pet, TickReport};
use crate::settings::Settings;

/// Shown under the status block once the pet has died.
pub const DEATH_NOTICE: &str = "Oh no! Your pet has passed away...";
/// Shown when Start is pressed with a blank name.
pub const EMPTY_NAME: &str = "Please enter a name for your pet.";

/// Which screen the game is on.
#[derive(Debug)]
pub enum Phase {
    /// Waiting for the player to name their pet.
    Naming,
    Playing(Pet),
}

/// A transient line of feedback under the status block.
#[derive(Debug, Clone, PartialEq)]
struct Message {
    text: String,
    /// Seconds until it disappears.
    remaining: f64,
}

/// Everything the window shows, minus the widgets themselves.
///
/// Owns the single pet and drives it from frame deltas: ticks on a fixed
/// interval, message expiry and the face animation.
pub struct Session<R = fastrand::Rng> {
    phase: Phase,
    settings: Settings,
    rng: R,
    accumulator: f64,
    tick_count: u64,
    message: Option<Message>,
    anim: AnimationState,
}

impl Session<fastrand::Rng> {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, fastrand::Rng::new())
    }
}

impl<R: DecaySource> Session<R> {
    pub fn with_rng(settings: Settings, rng: R) -> Self {
        Self {
            phase: Phase::Naming,
            anim: AnimationState::new(settings.frame_interval),
            settings,
            rng,
            accumulator: 0.0,
            tick_count: 0,
            message: None,
        }
    }

    /// Adopt a pet. Rejects blank names and restarts are ignored.
    pub fn start(&mut self, name: &str) -> bool {
        if matches!(self.phase, Phase::Playing(_)) {
            return false;
        }
        let name = name.trim();
        if name.is_empty() {
            self.show_message(EMPTY_NAME);
            return false;
        }

        log::info!("Adopted a new pet: {name}");
        self.phase = Phase::Playing(Pet::new(name));
        self.accumulator = 0.0;
        // First status refresh ticks straight away.
        self.run_tick();
        true
    }

    /// Advance timers by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        if let Some(msg) = &mut self.message {
            msg.remaining -= dt;
        }
        if self.message.as_ref().is_some_and(|m| m.remaining <= 0.0) {
            self.message = None;
        }

        let Phase::Playing(pet) = &self.phase else {
            return;
        };
        let alive = pet.is_alive();
        let mood = pet.display_mood();
        self.anim.update(dt as f32, mood);

        if !alive || self.settings.tick_interval <= 0.0 {
            return;
        }

        // Catch up at most two ticks after a long stall (minimised window).
        self.accumulator = (self.accumulator + dt).min(self.settings.tick_interval * 2.0);
        while self.accumulator >= self.settings.tick_interval {
            self.accumulator -= self.settings.tick_interval;
            if self.run_tick().died {
                self.accumulator = 0.0;
                break;
            }
        }
    }

    /// Feed button handler.
    pub fn feed(&mut self) {
        let Phase::Playing(pet) = &mut self.phase else {
            return;
        };
        if let Some(msg) = pet.feed() {
            log::debug!("feed -> energy={} happiness={}", pet.energy(), pet.happiness());
            self.show_message(&msg);
            self.anim.play_once(Clip::Eating);
        }
    }

    /// Play button handler.
    pub fn play(&mut self) {
        let Phase::Playing(pet) = &mut self.phase else {
            return;
        };
        if let Some(msg) = pet.play() {
            log::debug!("play -> energy={} happiness={}", pet.energy(), pet.happiness());
            self.show_message(&msg);
            self.anim.play_once(Clip::Playing);
        }
    }

    fn run_tick(&mut self) -> TickReport {
        let Phase::Playing(pet) = &mut self.phase else {
            return TickReport::default();
        };
        let report = pet.tick(&mut self.rng);
        self.tick_count += 1;

        log::debug!(
            "tick {} | energy={} happiness={} health={} mood={} xp={}/{}",
            self.tick_count,
            pet.energy(),
            pet.happiness(),
            pet.health(),
            pet.mood(),
            pet.xp(),
            pet.xp_to_next_level(),
        );

        if report.died {
            log::info!("{} has died after {} ticks", pet.name(), self.tick_count);
        }
        if let Some(level) = report.leveled_up {
            let text = format!("{} has reached level {level}!", pet.name());
            log::info!("{text}");
            self.show_message(&text);
        }
        report
    }

    fn show_message(&mut self, text: &str) {
        self.message = Some(Message {
            text: text.to_owned(),
            remaining: self.settings.message_lifetime,
        });
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn pet(&self) -> Option<&Pet> {
        match &self.phase {
            Phase::Playing(pet) => Some(pet),
            Phase::Naming => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    /// Face to draw, or `None` before a pet exists.
    pub fn face(&self) -> Option<&'static str> {
        self.pet().map(|_| self.anim.current())
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Whether feed/play should be clickable.
    pub fn actions_enabled(&self) -> bool {
        self.pet().is_some_and(Pet::is_alive)
    }

    /// The status block, one line per entry.
    pub fn status_lines(&self) -> Vec<String> {
        let Some(pet) = self.pet() else {
            return Vec::new();
        };
        let mut lines = vec![
            format!("{}'s Status:", pet.name()),
            format!("Energy: {}/100", pet.energy()),
            format!("Happiness: {}/100", pet.happiness()),
            format!("Health: {}/100", pet.health()),
            format!("Mood: {}", pet.mood()),
            format!(
                "Level: {} (XP: {}/{})",
                pet.level(),
                pet.xp(),
                pet.xp_to_next_level()
            ),
        ];
        if !pet.is_alive() {
            lines.push(DEATH_NOTICE.to_owned());
        }
        lines
    }
}
