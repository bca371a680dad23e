//! Data-driven game balance
//!
//! Every number that distinguishes the Player, Enemy, and Boss lives here:
//! animation tables (frame counts, per-frame ticks, damage windows), movement
//! speeds, cooldowns, knockback response, and hit geometry. The simulation
//! code is generic over these tables; there is exactly one state machine and
//! one combat path for all three actor kinds.

use crate::sim::actor::ActorKind;
use crate::sim::anim::{AnimConfig, AnimId, DamageWindow};
use crate::sim::collision::CollisionStyle;

/// An AABB carved out of an actor's full sprite box.
///
/// Horizontally centered; `w_frac`/`h_frac` scale the actor's dimensions and
/// `top_frac` offsets the top edge down from the sprite's top.
#[derive(Debug, Clone, Copy)]
pub struct BoxSpec {
    pub w_frac: f32,
    pub h_frac: f32,
    pub top_frac: f32,
}

/// Horizontal placement of an attack box.
#[derive(Debug, Clone, Copy)]
pub enum AttackAnchor {
    /// Box extends from `x + pivot_frac * width` in the facing direction.
    Pivot(f32),
    /// Box is centered on the actor, shifted forward by `width * forward_frac`.
    Center { forward_frac: f32 },
}

/// Attack reach geometry.
#[derive(Debug, Clone, Copy)]
pub struct AttackBoxSpec {
    pub w_frac: f32,
    pub h_frac: f32,
    pub top_frac: f32,
    pub anchor: AttackAnchor,
}

/// Per-kind knockback response.
#[derive(Debug, Clone, Copy)]
pub struct KnockbackTuning {
    /// Per-tick exponential decay factor
    pub decay: f32,
    /// Divisor applied before the scalar moves the body (Boss mass)
    pub resistance: f32,
}

/// Static per-actor-kind balance table.
#[derive(Debug, Clone, Copy)]
pub struct ActorTuning {
    pub width: f32,
    pub height: f32,
    /// Sprite-sheet frame dimensions (for source-rect computation)
    pub frame_width: u32,
    pub frame_height: u32,
    pub max_health: i32,
    pub damage: i32,
    pub knockback: KnockbackTuning,
    pub hurtbox: BoxSpec,
    pub attack_box: AttackBoxSpec,
    pub collision: CollisionStyle,
}

const PLAYER: ActorTuning = ActorTuning {
    width: 240.0, // 120x80 frames at 2x scale
    height: 160.0,
    frame_width: 120,
    frame_height: 80,
    max_health: 100,
    damage: 25,
    knockback: KnockbackTuning { decay: 0.8, resistance: 1.0 },
    hurtbox: BoxSpec { w_frac: 0.25, h_frac: 0.6, top_frac: 0.4 },
    attack_box: AttackBoxSpec {
        w_frac: 0.5,
        h_frac: 0.7,
        top_frac: 0.35,
        anchor: AttackAnchor::Pivot(0.4),
    },
    collision: CollisionStyle::LandingOnly,
};

const ENEMY: ActorTuning = ActorTuning {
    width: 192.0, // 96x64 frames at 2x scale
    height: 128.0,
    frame_width: 96,
    frame_height: 64,
    max_health: 100,
    damage: 10,
    knockback: KnockbackTuning { decay: 0.7, resistance: 1.0 },
    hurtbox: BoxSpec { w_frac: 0.5, h_frac: 0.55, top_frac: 0.45 },
    attack_box: AttackBoxSpec {
        w_frac: 0.85,
        h_frac: 0.65,
        top_frac: 0.5,
        anchor: AttackAnchor::Center { forward_frac: 0.0 },
    },
    collision: CollisionStyle::LandingOnly,
};

const BOSS: ActorTuning = ActorTuning {
    width: 288.0, // 96x64 frames at 3x scale
    height: 192.0,
    frame_width: 96,
    frame_height: 64,
    max_health: 1000,
    damage: 30,
    knockback: KnockbackTuning { decay: 0.6, resistance: 3.0 },
    hurtbox: BoxSpec { w_frac: 0.4, h_frac: 0.6, top_frac: 0.4 },
    attack_box: AttackBoxSpec {
        w_frac: 0.8,
        h_frac: 0.8,
        top_frac: 0.1,
        anchor: AttackAnchor::Center { forward_frac: 0.1 },
    },
    collision: CollisionStyle::Solid,
};

impl ActorKind {
    pub fn tuning(self) -> &'static ActorTuning {
        match self {
            ActorKind::Player => &PLAYER,
            ActorKind::Enemy => &ENEMY,
            ActorKind::Boss => &BOSS,
        }
    }
}

/// Animation table: frame count, per-frame tick duration, damage window.
///
/// The Player's single-frame [1,1] attack window and the Enemy's whole-swing
/// [0,9] window are deliberate balance asymmetries; the Boss strikes on
/// frames 3-4 of its swing.
pub fn anim_config(kind: ActorKind, id: AnimId) -> AnimConfig {
    match (kind, id) {
        (ActorKind::Player, AnimId::Idle) => AnimConfig::looping(10, 8),
        (ActorKind::Player, AnimId::Run) => AnimConfig::looping(10, 6),
        (ActorKind::Player, AnimId::Dash) => AnimConfig::looping(2, 4),
        (ActorKind::Player, AnimId::Attack) => {
            AnimConfig::attack(6, 4, DamageWindow { start: 1, end: 1 })
        }
        (ActorKind::Player, AnimId::Attack2) => {
            AnimConfig::attack(6, 4, DamageWindow { start: 1, end: 1 })
        }

        (ActorKind::Enemy, AnimId::Idle) => AnimConfig::looping(8, 8),
        (ActorKind::Enemy, AnimId::Walk) => AnimConfig::looping(10, 6),
        (ActorKind::Enemy, AnimId::Attack) => {
            AnimConfig::attack(10, 2, DamageWindow { start: 0, end: 9 })
        }

        (ActorKind::Boss, AnimId::Idle) => AnimConfig::looping(8, 10),
        (ActorKind::Boss, AnimId::Walk) => AnimConfig::looping(10, 8),
        (ActorKind::Boss, AnimId::Attack) => {
            AnimConfig::attack(10, 6, DamageWindow { start: 3, end: 4 })
        }

        // A kind never enters a state outside its closed set; fall back to a
        // one-frame idle rather than panicking mid-tick.
        _ => AnimConfig::looping(1, 8),
    }
}

/// Knockback magnitude dealt per attacker/defender pair (sign is applied by
/// the combat resolver).
pub fn knockback_dealt(attacker: ActorKind, defender: ActorKind) -> f32 {
    match (attacker, defender) {
        (ActorKind::Player, ActorKind::Enemy) => 16.0,
        (ActorKind::Player, ActorKind::Boss) => 20.0,
        (ActorKind::Enemy, ActorKind::Player) => 20.0,
        (ActorKind::Boss, ActorKind::Player) => 25.0,
        _ => 0.0,
    }
}

/// Player-only control tuning.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    pub move_speed: f32,
    /// Jump impulse when grounded at the moment of the command
    pub jump_impulse: f32,
    /// Weaker impulse used when a buffered jump fires on landing
    pub buffered_jump_impulse: f32,
    pub jump_buffer_ticks: i32,
    pub dash_speed: f32,
    pub dash_ticks: i32,
    pub dash_cooldown: i32,
    pub attack_cooldown: i32,
}

pub const PLAYER_CTL: PlayerTuning = PlayerTuning {
    move_speed: 5.0,
    jump_impulse: -18.0,
    buffered_jump_impulse: -15.0,
    jump_buffer_ticks: 8,
    dash_speed: 20.0,
    dash_ticks: 14,
    dash_cooldown: 40,
    attack_cooldown: 10,
};

/// Enemy proximity AI tuning.
#[derive(Debug, Clone, Copy)]
pub struct EnemyAiTuning {
    /// Beyond this horizontal distance the enemy does not update at all
    pub activation_range: f32,
    /// "In front" detection distance
    pub detection_range: f32,
    /// Closer than this, stop walking and try to attack
    pub melee_range: f32,
    pub move_speed: f32,
    pub attack_cooldown: i32,
    /// Upward impulse for the ledge-avoidance hop
    pub jump_impulse: f32,
}

pub const ENEMY_AI: EnemyAiTuning = EnemyAiTuning {
    activation_range: 900.0,
    detection_range: 2000.0,
    melee_range: 120.0,
    move_speed: 2.0,
    attack_cooldown: 150,
    jump_impulse: -12.0,
};

/// Boss AI tuning, with enraged overrides.
#[derive(Debug, Clone, Copy)]
pub struct BossAiTuning {
    /// Beyond this distance the boss chases at full speed
    pub chase_range: f32,
    /// Fraction of full speed used in the approach band
    pub approach_factor: f32,
    pub speed: f32,
    pub enraged_speed: f32,
    pub attack_range: f32,
    pub enraged_attack_range: f32,
    pub attack_delay: i32,
    pub enraged_attack_delay: i32,
}

impl BossAiTuning {
    pub fn speed(&self, enraged: bool) -> f32 {
        if enraged { self.enraged_speed } else { self.speed }
    }

    pub fn attack_range(&self, enraged: bool) -> f32 {
        if enraged { self.enraged_attack_range } else { self.attack_range }
    }

    pub fn attack_delay(&self, enraged: bool) -> i32 {
        if enraged { self.enraged_attack_delay } else { self.attack_delay }
    }
}

pub const BOSS_AI: BossAiTuning = BossAiTuning {
    chase_range: 300.0,
    approach_factor: 0.7,
    speed: 3.5,
    enraged_speed: 5.0,
    attack_range: 150.0,
    enraged_attack_range: 200.0,
    attack_delay: 40,
    enraged_attack_delay: 30,
};
