//! Fixed-period simulation tick and spawner
//!
//! Two entry points, matching the two timers that drive the game:
//! `spawn_object` (1000 ms period) and `tick` (50 ms period). Both are
//! no-ops once the run is over; the driver is expected to tear the timers
//! down at that point, this is the backstop for a stale fire.

use rand::Rng;

use super::collision::{object_caught, object_missed, object_off_screen};
use super::state::{FallingObject, GamePhase, GameState};
use crate::consts::*;

/// Append one falling object at a random column with a random speed
///
/// Uses the state-owned seeded RNG, so spawn sequences are reproducible
/// for a given seed. No bound on live objects beyond catch/miss turnover.
pub fn spawn_object(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    let id = state.next_entity_id();
    let x = state.rng.random_range(0.0..OBJECT_MAX_X);
    let speed = state.rng.random_range(OBJECT_MIN_SPEED..OBJECT_MAX_SPEED);
    state.objects.push(FallingObject::new(id, x, speed));
}

/// Advance the simulation by one tick
///
/// Per object, in order: advance by its speed, then catch test, then miss
/// test, then off-screen cleanup. Catch is checked first per tick, so an
/// object can never be both caught and missed. Removal is immediate either
/// way, which keeps the counters exact sums over distinct objects.
pub fn tick(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    let basket = state.basket.clone();
    let mut caught = 0u32;
    let mut missed = 0u32;

    state.objects.retain_mut(|obj| {
        obj.advance();
        if object_caught(obj, &basket) {
            caught += 1;
            return false;
        }
        if object_missed(obj) {
            missed += 1;
            return false;
        }
        !object_off_screen(obj)
    });

    state.score += caught;
    state.missed += missed;

    if state.missed >= MISS_LIMIT {
        state.phase = GamePhase::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Basket;
    use proptest::prelude::*;

    /// Push an object directly, bypassing the spawner RNG
    fn push_object(state: &mut GameState, x: f32, speed: f32) {
        let id = state.next_entity_id();
        state.objects.push(FallingObject::new(id, x, speed));
    }

    #[test]
    fn test_object_falls_linearly() {
        let mut state = GameState::new(1);
        state.basket = Basket { x: BASKET_MAX_X }; // out of the way
        push_object(&mut state, 0.0, 3.0);

        for n in 1..=100u32 {
            tick(&mut state);
            assert_eq!(state.objects[0].pos.y, 3.0 * n as f32);
        }
    }

    #[test]
    fn test_catch_when_bottom_crosses_line() {
        // Object at x=0 with speed 4, basket parked at 0: bottom edge
        // reaches the catch line (y + 30 >= 780) on tick 188 (y = 752).
        let mut state = GameState::new(1);
        state.basket = Basket { x: 0.0 };
        push_object(&mut state, 0.0, 4.0);

        for _ in 0..187 {
            tick(&mut state);
        }
        assert_eq!(state.score, 0);
        assert_eq!(state.objects.len(), 1);

        tick(&mut state);
        assert_eq!(state.score, 1);
        assert!(state.objects.is_empty());
        assert_eq!(state.missed, 0);
    }

    #[test]
    fn test_catch_scenario_195_ticks() {
        // Object at x=0, speed 4, basket parked at 0: within 195 ticks it
        // has been caught exactly once and removed.
        let mut state = GameState::new(1);
        state.basket = Basket { x: 0.0 };
        push_object(&mut state, 0.0, 4.0);

        for _ in 0..195 {
            tick(&mut state);
        }
        assert_eq!(state.score, 1);
        assert_eq!(state.missed, 0);
        assert!(state.objects.is_empty());
    }

    #[test]
    fn test_uncaught_object_missed_once() {
        // Basket far right, object falls down the left edge
        let mut state = GameState::new(1);
        state.basket = Basket { x: BASKET_MAX_X };
        push_object(&mut state, 0.0, 4.0);

        // Top edge reaches 800 on tick 200
        for _ in 0..199 {
            tick(&mut state);
        }
        assert_eq!(state.missed, 0);

        tick(&mut state);
        assert_eq!(state.missed, 1);
        assert_eq!(state.score, 0);
        assert!(state.objects.is_empty());

        // Removed on the miss tick - no double counting afterwards
        for _ in 0..50 {
            tick(&mut state);
        }
        assert_eq!(state.missed, 1);
    }

    #[test]
    fn test_three_misses_end_the_run() {
        let mut state = GameState::new(1);
        state.basket = Basket { x: BASKET_MAX_X };
        // Staggered speeds so the misses resolve on different ticks
        push_object(&mut state, 0.0, 4.0);
        push_object(&mut state, 50.0, 3.0);
        push_object(&mut state, 100.0, 2.0);

        for _ in 0..400 {
            tick(&mut state);
        }
        assert_eq!(state.missed, MISS_LIMIT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.objects.is_empty());
    }

    #[test]
    fn test_game_over_halts_spawns_and_ticks() {
        let mut state = GameState::new(1);
        state.basket = Basket { x: BASKET_MAX_X };
        push_object(&mut state, 0.0, 4.0);
        push_object(&mut state, 50.0, 4.0);
        push_object(&mut state, 100.0, 2.0);

        while state.phase == GamePhase::Playing {
            tick(&mut state);
        }

        let ticks_at_end = state.time_ticks;
        let score_at_end = state.score;

        // Stale timer fires are no-ops
        spawn_object(&mut state);
        tick(&mut state);
        assert_eq!(state.time_ticks, ticks_at_end);
        assert_eq!(state.score, score_at_end);
        assert_eq!(state.missed, MISS_LIMIT);
        assert!(state.objects.is_empty());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(1);
        state.basket = Basket { x: BASKET_MAX_X };
        push_object(&mut state, 0.0, 4.0);
        push_object(&mut state, 50.0, 4.0);
        push_object(&mut state, 100.0, 2.0);
        while state.phase == GamePhase::Playing {
            tick(&mut state);
        }

        // Restart is a fresh state under a new seed
        let state = GameState::new(99);
        assert_eq!(state.basket.x, PLAYFIELD_WIDTH / 2.0 - BASKET_WIDTH / 2.0);
        assert!(state.objects.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.missed, 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_spawn_ranges() {
        let mut state = GameState::new(42);
        for _ in 0..200 {
            spawn_object(&mut state);
        }
        assert_eq!(state.objects.len(), 200);
        for obj in &state.objects {
            assert!(obj.pos.x >= 0.0 && obj.pos.x < OBJECT_MAX_X);
            assert!(obj.speed >= OBJECT_MIN_SPEED && obj.speed < OBJECT_MAX_SPEED);
            assert_eq!(obj.pos.y, 0.0);
        }
    }

    #[test]
    fn test_spawned_objects_keep_id_order() {
        let mut state = GameState::new(42);
        for _ in 0..20 {
            spawn_object(&mut state);
        }
        for pair in state.objects.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and timer sequence stay identical
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        for step in 0..600u32 {
            // Spawn every 20th tick, mirroring the 1000ms / 50ms periods
            if step % 20 == 0 {
                spawn_object(&mut state1);
                spawn_object(&mut state2);
            }
            tick(&mut state1);
            tick(&mut state2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.missed, state2.missed);
        assert_eq!(state1.objects.len(), state2.objects.len());
        for (a, b) in state1.objects.iter().zip(&state2.objects) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.speed, b.speed);
        }
    }

    proptest! {
        /// After N ticks an unresolved object sits at y = speed * N
        #[test]
        fn prop_fall_is_linear(
            speed in OBJECT_MIN_SPEED..OBJECT_MAX_SPEED,
            n in 1u32..150,
        ) {
            let mut state = GameState::new(1);
            state.basket = Basket { x: BASKET_MAX_X };
            push_object(&mut state, 0.0, speed);
            for _ in 0..n {
                tick(&mut state);
            }
            // speed < 4 and n < 150 keeps y under 600, so the object is
            // still live; repeated f32 addition allows a tiny error
            prop_assert_eq!(state.objects.len(), 1);
            prop_assert!((state.objects[0].pos.y - speed * n as f32).abs() < 1e-2);
        }

        /// An unattended run always ends in GameOver at the miss limit when
        /// nothing can be caught, regardless of spawn timing. Misses are
        /// commutative sums, so two objects resolving on the very tick that
        /// crosses the limit may push the counter past it; the phase still
        /// flips exactly once.
        #[test]
        fn prop_unattended_run_ends_at_miss_limit(seed in any::<u64>()) {
            let mut state = GameState::new(seed);
            state.basket = Basket { x: BASKET_MAX_X };

            let mut steps = 0u32;
            while state.phase == GamePhase::Playing && steps < 100_000 {
                if steps % 20 == 0 {
                    spawn_object(&mut state);
                    // Basket never moves; shift spawns that would land in
                    // its column so every object is a guaranteed miss
                    if let Some(obj) = state.objects.last_mut() {
                        if obj.pos.x + OBJECT_SIZE > BASKET_MAX_X {
                            obj.pos.x = 0.0;
                        }
                    }
                }
                tick(&mut state);
                steps += 1;
            }

            prop_assert_eq!(state.phase, GamePhase::GameOver);
            prop_assert!(state.missed >= MISS_LIMIT);
            prop_assert_eq!(state.score, 0);
        }
    }
}
