/// Seconds between simulation ticks.
const TICK_INTERVAL: f64 = 5.0;
/// Seconds each animation frame stays on screen.
const FRAME_INTERVAL: f32 = 0.5;
/// Seconds a feed/play/level-up message stays visible.
const MESSAGE_LIFETIME: f64 = 3.0;

/// Env var overriding the tick interval (seconds, positive float).
pub const TICK_ENV: &str = "PETPAL_TICK_SECS";

/// Runtime timing knobs for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub tick_interval: f64,
    pub frame_interval: f32,
    pub message_lifetime: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,
            frame_interval: FRAME_INTERVAL,
            message_lifetime: MESSAGE_LIFETIME,
        }
    }
}

impl Settings {
    /// Defaults, with the tick interval taken from `PETPAL_TICK_SECS` if set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, with overrides read through `lookup` (env var name -> value).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(raw) = lookup(TICK_ENV) {
            settings.apply_tick_override(&raw);
        }
        settings
    }

    fn apply_tick_override(&mut self, raw: &str) {
        match raw.trim().parse::<f64>() {
            Ok(secs) if secs.is_finite() && secs > 0.0 => {
                log::info!("Tick interval set to {secs}s via {TICK_ENV}");
                self.tick_interval = secs;
            }
            _ => log::warn!("Ignoring invalid {TICK_ENV}={raw:?}, using {}s", self.tick_interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.tick_interval, 5.0);
        assert_eq!(s.frame_interval, 0.5);
        assert_eq!(s.message_lifetime, 3.0);
    }

    #[test]
    fn lookup_reads_tick_var() {
        let s = Settings::from_lookup(|key| (key == TICK_ENV).then(|| "1.5".to_owned()));
        assert_eq!(s.tick_interval, 1.5);

        let s = Settings::from_lookup(|_| None);
        assert_eq!(s, Settings::default());

        let s = Settings::from_lookup(|_| Some("soon".to_owned()));
        assert_eq!(s.tick_interval, 5.0);
    }

    #[test]
    fn from_env_honours_tick_var() {
        std::env::set_var(TICK_ENV, "2");
        let s = Settings::from_env();
        std::env::remove_var(TICK_ENV);
        assert_eq!(s.tick_interval, 2.0);
    }

    #[test]
    fn tick_override() {
        let mut s = Settings::default();
        s.apply_tick_override(" 2.5 ");
        assert_eq!(s.tick_interval, 2.5);

        for bad in ["", "fast", "0", "-1", "NaN", "inf"] {
            s.apply_tick_override(bad);
            assert_eq!(s.tick_interval, 2.5, "{bad:?} should be ignored");
        }
    }
}
