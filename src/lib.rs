//! Bonefall - a side-scrolling action game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, animation, combat, game state)
//! - `tuning`: Data-driven per-actor balance tables
//! - `snapshot`: Read-only render snapshot for the drawing collaborator
//!
//! Rendering, asset loading, and the windowing/input shell live outside this
//! crate; they drive `sim::tick` at a fixed rate and read `snapshot` output.

pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use sim::{GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 60;

    /// Viewport dimensions (world units)
    pub const VIEW_WIDTH: f32 = 1600.0;
    pub const VIEW_HEIGHT: f32 = 900.0;
    /// Level spans three screens
    pub const WORLD_WIDTH: f32 = VIEW_WIDTH * 3.0;

    /// Gravity acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Terminal fall speed (units/tick)
    pub const MAX_FALL_SPEED: f32 = 20.0;
    /// Knockback below this magnitude snaps to zero
    pub const KNOCKBACK_EPSILON: f32 = 0.1;

    /// Ticks a defender's hit flag stays set after being struck
    pub const HIT_COOLDOWN_TICKS: i32 = 30;
    /// Score that triggers the one-time boss spawn
    pub const BOSS_SPAWN_SCORE: u32 = 3000;
    /// Score for killing a regular enemy
    pub const ENEMY_KILL_SCORE: u32 = 100;
    /// Score for killing the boss
    pub const BOSS_KILL_SCORE: u32 = 1000;
    /// Every Nth enemy kill drops a potion
    pub const POTION_KILL_INTERVAL: u32 = 5;
    /// Interval between sky drops during the boss fight (5 s at 60 Hz)
    pub const BOSS_POTION_DROP_TICKS: u32 = 300;

    /// Potion descent speed (units/tick)
    pub const POTION_FALL_SPEED: f32 = 4.0;
    /// Potion pickup dimensions
    pub const POTION_SIZE: f32 = 32.0;
    /// Shared Speed/Power buff duration (8 s at 60 Hz)
    pub const BUFF_DURATION_TICKS: i32 = 480;
    /// Speed buff movement multiplier
    pub const SPEED_BUFF_MULT: f32 = 1.5;
    /// Power buff damage multiplier
    pub const POWER_BUFF_MULT: i32 = 2;

    /// Health potion restore amount (capped at max health)
    pub const HEALTH_POTION_RESTORE: i32 = 50;
}

/// Horizontal facing of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Unit sign of this facing (-1.0 left, +1.0 right)
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing toward a target x from a source x
    #[inline]
    pub fn toward(from_x: f32, to_x: f32) -> Self {
        if to_x >= from_x { Facing::Right } else { Facing::Left }
    }
}
