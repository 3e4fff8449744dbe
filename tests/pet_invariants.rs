//! Property tests for the pet's state-transition invariants.

use petpal::pet::rng::{MaxRoll, MinRoll};
use petpal::pet::{Mood, Pet, Rules};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Tick,
    Feed,
    Play,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => Just(Op::Tick),
        1 => Just(Op::Feed),
        2 => Just(Op::Play),
    ]
}

fn apply(pet: &mut Pet, op: Op, rng: &mut fastrand::Rng) {
    match op {
        Op::Tick => {
            pet.tick(rng);
        }
        Op::Feed => {
            pet.feed();
        }
        Op::Play => {
            pet.play();
        }
    }
}

fn stats(pet: &Pet) -> (u8, u8, u8, u32, u32, Mood) {
    (pet.energy(), pet.happiness(), pet.health(), pet.level(), pet.xp(), pet.mood())
}

/// A pet that starts exhausted and frail so random runs reach death.
fn frail_rules() -> impl Strategy<Value = Rules> {
    (0u8..=40, 0u8..=100, 1u8..=15).prop_map(|(energy, happiness, health)| Rules {
        initial_energy: energy,
        initial_happiness: happiness,
        initial_health: health,
        ..Rules::default()
    })
}

proptest! {
    /// Every bounded stat stays in [0, 100] whatever the player does.
    #[test]
    fn stats_stay_bounded(seed in any::<u64>(), ops in proptest::collection::vec(arb_op(), 1..400)) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut pet = Pet::new("Rex");
        for op in ops {
            apply(&mut pet, op, &mut rng);
            prop_assert!(pet.energy() <= 100);
            prop_assert!(pet.happiness() <= 100);
            prop_assert!(pet.health() <= 100);
            prop_assert!(pet.level() >= 1);
            prop_assert!(pet.xp() < pet.xp_to_next_level());
        }
    }

    /// Mood always matches the classification of the current stats.
    #[test]
    fn mood_is_derived(
        seed in any::<u64>(),
        rules in frail_rules(),
        ops in proptest::collection::vec(arb_op(), 1..300),
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut pet = Pet::with_rules("Rex", rules);
        for op in ops {
            apply(&mut pet, op, &mut rng);
            let expected = Mood::classify(pet.rules(), pet.energy(), pet.happiness(), pet.health());
            prop_assert_eq!(pet.mood(), expected);
            if pet.is_alive() {
                prop_assert_eq!(pet.display_mood(), expected);
            } else {
                prop_assert_eq!(pet.display_mood(), Mood::Dead);
            }
        }
    }

    /// Death is permanent and freezes every stat.
    #[test]
    fn death_is_terminal(
        seed in any::<u64>(),
        rules in frail_rules(),
        ops in proptest::collection::vec(arb_op(), 1..300),
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut pet = Pet::with_rules("Rex", rules);
        let mut frozen = None;
        for op in ops {
            let was_alive = pet.is_alive();
            apply(&mut pet, op, &mut rng);
            prop_assert!(was_alive || !pet.is_alive(), "pet came back to life");

            if !pet.is_alive() {
                prop_assert_eq!(pet.health(), 0);
                match frozen {
                    None => frozen = Some(stats(&pet)),
                    Some(before) => prop_assert_eq!(before, stats(&pet)),
                }
            }
        }
    }

    /// Feeding never overshoots the cap and always adds the fixed amounts.
    #[test]
    fn feed_clamps(energy in 0u8..=100, happiness in 0u8..=100) {
        let rules = Rules {
            initial_energy: energy,
            initial_happiness: happiness,
            ..Rules::default()
        };
        let mut pet = Pet::with_rules("Rex", rules);
        prop_assert!(pet.feed().is_some());
        prop_assert_eq!(pet.energy(), energy.saturating_add(30).min(100));
        prop_assert_eq!(pet.happiness(), happiness.saturating_add(10).min(100));
    }

    /// Playing trades energy for happiness, clamped at both ends.
    #[test]
    fn play_clamps(energy in 0u8..=100, happiness in 0u8..=100) {
        let rules = Rules {
            initial_energy: energy,
            initial_happiness: happiness,
            ..Rules::default()
        };
        let mut pet = Pet::with_rules("Rex", rules);
        prop_assert!(pet.play().is_some());
        prop_assert_eq!(pet.energy(), energy.saturating_sub(10));
        prop_assert_eq!(pet.happiness(), happiness.saturating_add(20).min(100));
    }
}

#[test]
fn rex_scenario() {
    let mut pet = Pet::new("Rex");
    assert_eq!(pet.health(), 100);
    assert_eq!(pet.happiness(), 50);
    assert!(pet.is_alive());

    pet.play();
    pet.play();
    assert_eq!(pet.energy(), 80);
    pet.feed();
    assert_eq!(pet.energy(), 100);
    assert_eq!(pet.happiness(), 100);
    assert_eq!(pet.mood(), Mood::Happy);
}

#[test]
fn neglected_pet_eventually_dies() {
    let mut pet = Pet::new("Rex");
    let mut ticks = 0;
    while pet.is_alive() {
        pet.tick(&mut MaxRoll);
        ticks += 1;
        assert!(ticks < 1_000);
    }
    // Energy goes critical on tick 80, then health drops 2 per tick.
    assert_eq!(ticks, 129);
    assert_eq!(pet.display_mood(), Mood::Dead);
}

#[test]
fn gentle_rolls_never_kill() {
    let mut pet = Pet::new("Rex");
    for _ in 0..1_000 {
        pet.tick(&mut MinRoll);
    }
    assert!(pet.is_alive());
    assert_eq!(pet.energy(), 100);
    assert_eq!(pet.happiness(), 100);
}
