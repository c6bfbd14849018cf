//! Game state and core simulation types
//!
//! The whole run lives in one `GameState`: basket, live objects, counters,
//! phase. For a fixed seed and input sequence the state evolves identically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (miss limit reached)
    GameOver,
}

/// Basket movement direction (from arrow keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A falling object entity
///
/// `pos` is the top-left corner of the object's square bounding box.
/// `speed` is fixed at spawn and applied once per tick.
#[derive(Debug, Clone)]
pub struct FallingObject {
    pub id: u32,
    pub pos: Vec2,
    pub speed: f32,
}

impl FallingObject {
    pub fn new(id: u32, x: f32, speed: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, 0.0),
            speed,
        }
    }

    /// Advance one tick of linear fall
    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }

    /// Y of the object's bottom edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + OBJECT_SIZE
    }

    /// Horizontal span as (left, right)
    pub fn span(&self) -> (f32, f32) {
        (self.pos.x, self.pos.x + OBJECT_SIZE)
    }
}

/// The player's basket
///
/// Only the horizontal offset is mutable; the basket sits at the bottom of
/// the playfield with its top edge at `CATCH_LINE`.
#[derive(Debug, Clone)]
pub struct Basket {
    /// Left edge, clamped to [0, BASKET_MAX_X]
    pub x: f32,
}

impl Default for Basket {
    fn default() -> Self {
        // Start centered
        Self {
            x: PLAYFIELD_WIDTH / 2.0 - BASKET_WIDTH / 2.0,
        }
    }
}

impl Basket {
    /// Step the basket one keypress worth in `dir`, clamped to the playfield
    pub fn step(&mut self, dir: Direction) {
        self.x = match dir {
            Direction::Left => (self.x - BASKET_STEP).max(0.0),
            Direction::Right => (self.x + BASKET_STEP).min(BASKET_MAX_X),
        };
    }

    /// Horizontal span as (left, right)
    pub fn span(&self) -> (f32, f32) {
        (self.x, self.x + BASKET_WIDTH)
    }
}

/// Complete game state (deterministic for a fixed seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG used by the spawner
    pub rng: Pcg32,
    /// Player basket
    pub basket: Basket,
    /// Live falling objects (sorted by id for determinism)
    pub objects: Vec<FallingObject>,
    /// Catches this run
    pub score: u32,
    /// Uncaught objects this run; `MISS_LIMIT` ends the run
    pub missed: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            basket: Basket::default(),
            objects: Vec::new(),
            score: 0,
            missed: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Apply one discrete basket move (input handler)
    ///
    /// Allowed in any phase: the key listener outlives the timers, and
    /// moving a basket in a halted simulation changes nothing that matters.
    pub fn move_basket(&mut self, dir: Direction) {
        self.basket.step(dir);
    }

    /// True once the miss limit has been reached
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
