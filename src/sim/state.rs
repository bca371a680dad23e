//! Game state and world-level types
//!
//! Everything the simulation owns lives on `GameState`; behavior and combat
//! routines receive it explicitly so every tick is reproducible from
//! (seed, input sequence) alone.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorKind};
use super::collision::Platform;
use crate::consts::*;

/// Current phase of gameplay. `Won` and `Lost` are terminal until restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    Won,
    Lost,
}

/// Pickup variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionKind {
    Health,
    Speed,
    Power,
}

impl PotionKind {
    pub fn random(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..3) {
            0 => PotionKind::Health,
            1 => PotionKind::Speed,
            _ => PotionKind::Power,
        }
    }
}

/// A falling pickup. `collected` is a one-way transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Potion {
    pub pos: Vec2,
    pub kind: PotionKind,
    pub collected: bool,
    /// Idle bob animation (cosmetic)
    pub frame: u32,
    pub frame_timer: u32,
}

/// Potion idle animation: 7 frames, 8 ticks each.
const POTION_FRAMES: u32 = 7;
const POTION_FRAME_TICKS: u32 = 8;

impl Potion {
    pub fn new(x: f32, y: f32, kind: PotionKind) -> Self {
        Self { pos: Vec2::new(x, y), kind, collected: false, frame: 0, frame_timer: 0 }
    }

    pub fn bounds(&self) -> super::body::Aabb {
        super::body::Aabb::new(self.pos.x, self.pos.y, POTION_SIZE, POTION_SIZE)
    }

    /// Advance the bob animation
    pub fn animate(&mut self) {
        self.frame_timer += 1;
        if self.frame_timer >= POTION_FRAME_TICKS {
            self.frame_timer = 0;
            self.frame = (self.frame + 1) % POTION_FRAMES;
        }
    }
}

/// A hit-spark particle. Cosmetic only; never feeds back into gameplay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: i32,
}

impl Particle {
    pub fn scatter(rng: &mut Pcg32, x: f32, y: f32) -> Self {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(2.0..5.0f32);
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: rng.random_range(20..40),
        }
    }
}

/// The controllable character: a regular actor plus input-driven extras
/// (dash, jump buffering, potion buffs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub actor: Actor,
    /// Level-triggered movement signals, sampled each tick
    pub move_left: bool,
    pub move_right: bool,
    pub dashing: bool,
    pub dash_timer: i32,
    pub dash_cooldown: i32,
    pub jump_queued: bool,
    pub jump_buffer: i32,
    pub speed_buff: bool,
    pub power_buff: bool,
    /// Shared Speed/Power countdown; reverts both flags at zero
    pub buff_timer: i32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            actor: Actor::new(ActorKind::Player, x, y),
            move_left: false,
            move_right: false,
            dashing: false,
            dash_timer: 0,
            dash_cooldown: 0,
            jump_queued: false,
            jump_buffer: 0,
            speed_buff: false,
            power_buff: false,
            buff_timer: 0,
        }
    }

    /// Attack power with the Power buff applied
    pub fn effective_damage(&self) -> i32 {
        if self.power_buff {
            self.actor.damage * POWER_BUFF_MULT
        } else {
            self.actor.damage
        }
    }
}

/// Complete game state (deterministic, serializable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Static level geometry, built once at init
    pub platforms: Vec<Platform>,
    /// Live enemies; empty once the boss has spawned
    pub enemies: Vec<Actor>,
    /// At most one boss, mutually exclusive with a populated enemy list
    pub boss: Option<Actor>,
    pub potions: Vec<Potion>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// Monotonically non-decreasing
    pub score: u32,
    pub kill_count: u32,
    /// Latches on the first threshold crossing; a second crossing spawns
    /// nothing
    pub boss_spawned: bool,
    /// Camera scroll offset, clamped to >= 0
    pub camera_x: f32,
    /// Ticks since the last sky drop during the boss fight
    pub boss_drop_timer: u32,
}

impl GameState {
    /// Create a fresh world: level geometry, player at the start marker, and
    /// the opening enemy wave.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = build_level(&mut rng);

        let mut state = Self {
            seed,
            rng,
            time_ticks: 0,
            phase: GamePhase::Running,
            player: Player::new(100.0, 100.0),
            platforms,
            enemies: Vec::new(),
            boss: None,
            potions: Vec::new(),
            particles: Vec::new(),
            score: 0,
            kill_count: 0,
            boss_spawned: false,
            camera_x: 0.0,
            boss_drop_timer: 0,
        };
        state.spawn_wave();
        state
    }

    /// Opening wave: five enemies spaced across the first screens.
    fn spawn_wave(&mut self) {
        for i in 0..5 {
            self.enemies.push(Actor::new(ActorKind::Enemy, 300.0 + i as f32 * 350.0, 50.0));
        }
    }

    /// Spawn a replacement enemy just off the right edge of the camera.
    pub fn spawn_replacement_enemy(&mut self) {
        let x = self.camera_x + VIEW_WIDTH + 200.0;
        self.enemies.push(Actor::new(ActorKind::Enemy, x, 50.0));
    }

    /// Burst of hit sparks at a combat impact.
    pub fn spawn_hit_particles(&mut self, x: f32, y: f32) {
        for _ in 0..12 {
            let particle = Particle::scatter(&mut self.rng, x, y);
            self.particles.push(particle);
        }
    }
}

/// Level construction: ground slab, bounding walls, and a scattered band of
/// mid-height platforms.
fn build_level(rng: &mut Pcg32) -> Vec<Platform> {
    let mut platforms = Vec::new();

    // Ground and the two world-edge walls.
    platforms.push(Platform::transparent(0.0, VIEW_HEIGHT - 90.0, WORLD_WIDTH, 60.0));
    platforms.push(Platform::transparent(-200.0, 0.0, 200.0, VIEW_HEIGHT));
    platforms.push(Platform::transparent(WORLD_WIDTH, 0.0, 200.0, VIEW_HEIGHT));

    let base_y = VIEW_HEIGHT - 300.0;
    for i in 0..20 {
        let x = 500.0 + i as f32 * 250.0 + rng.random_range(0.0..60.0);
        let y = base_y - rng.random_range(0.0..100.0);
        let w = 100.0 + rng.random_range(0.0..100.0);
        platforms.push(Platform::new(x, y, w, 20.0));
    }

    platforms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_starts_running_with_opening_wave() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.enemies.len(), 5);
        assert!(state.boss.is_none());
        assert_eq!(state.score, 0);
        assert_eq!(state.player.actor.health, 100);
        // Ground + 2 walls + 20 mid platforms.
        assert_eq!(state.platforms.len(), 23);
    }

    #[test]
    fn same_seed_builds_identical_levels() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        for (pa, pb) in a.platforms.iter().zip(&b.platforms) {
            assert_eq!(pa.rect, pb.rect);
        }
    }

    #[test]
    fn potion_animation_wraps() {
        let mut potion = Potion::new(0.0, 0.0, PotionKind::Health);
        for _ in 0..POTION_FRAMES * POTION_FRAME_TICKS {
            potion.animate();
        }
        assert_eq!(potion.frame, 0);
    }
}
