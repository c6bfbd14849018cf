//! Sky Catch - a basket-and-drops arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, catches, game state)
//! - `render`: Canvas 2D presentation (wasm32 only)

pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod render;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units)
    pub const PLAYFIELD_WIDTH: f32 = 600.0;
    pub const PLAYFIELD_HEIGHT: f32 = 800.0;

    /// Basket dimensions
    pub const BASKET_WIDTH: f32 = 100.0;
    pub const BASKET_HEIGHT: f32 = 20.0;

    /// Falling object bounding box (square)
    pub const OBJECT_SIZE: f32 = 30.0;

    /// Basket movement per keypress
    pub const BASKET_STEP: f32 = 30.0;

    /// Falling speed range, units per tick (uniform, half-open)
    pub const OBJECT_MIN_SPEED: f32 = 2.0;
    pub const OBJECT_MAX_SPEED: f32 = 4.0;

    /// Misses that end the run
    pub const MISS_LIMIT: u32 = 3;

    /// Spawner period
    pub const SPAWN_PERIOD_MS: i32 = 1000;
    /// Motion/collision tick period
    pub const TICK_PERIOD_MS: i32 = 50;

    /// Rightmost basket position (left edge)
    pub const BASKET_MAX_X: f32 = PLAYFIELD_WIDTH - BASKET_WIDTH;
    /// Rightmost spawn position for an object (left edge)
    pub const OBJECT_MAX_X: f32 = PLAYFIELD_WIDTH - OBJECT_SIZE;
    /// Y of the basket's top edge (catch boundary)
    pub const CATCH_LINE: f32 = PLAYFIELD_HEIGHT - BASKET_HEIGHT;
}
