use std::fmt;

use super::rules::Rules;

/// Derived mood label. Never set directly, always recomputed from stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Tired,
    Sick,
    Neutral,
    /// Only reported by `Pet::display_mood` once the pet has died.
    Dead,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Happy, Mood::Tired, Mood::Sick, Mood::Neutral, Mood::Dead];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Tired => "Tired",
            Mood::Sick => "Sick",
            Mood::Neutral => "Neutral",
            Mood::Dead => "Dead",
        }
    }

    /// Priority-ordered classification: sickness beats tiredness beats joy.
    pub fn classify(rules: &Rules, energy: u8, happiness: u8, health: u8) -> Mood {
        if health <= rules.sick_health {
            Mood::Sick
        } else if energy <= rules.critical_energy {
            Mood::Tired
        } else if happiness >= rules.happy_happiness {
            Mood::Happy
        } else {
            Mood::Neutral
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(energy: u8, happiness: u8, health: u8) -> Mood {
        Mood::classify(&Rules::default(), energy, happiness, health)
    }

    #[test]
    fn sick_wins_over_everything() {
        assert_eq!(classify(10, 100, 30), Mood::Sick);
        assert_eq!(classify(100, 100, 0), Mood::Sick);
    }

    #[test]
    fn tired_wins_over_happy() {
        assert_eq!(classify(20, 90, 31), Mood::Tired);
    }

    #[test]
    fn happy_at_threshold() {
        assert_eq!(classify(21, 80, 100), Mood::Happy);
        assert_eq!(classify(21, 79, 100), Mood::Neutral);
    }

    #[test]
    fn labels() {
        assert_eq!(Mood::Tired.to_string(), "Tired");
        assert_eq!(Mood::Dead.label(), "Dead");
    }
}
