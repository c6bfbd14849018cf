//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (motion is in units per tick, not per second)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID / spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{object_caught, object_missed, spans_overlap};
pub use state::{Basket, Direction, FallingObject, GamePhase, GameState};
pub use tick::{spawn_object, tick};
