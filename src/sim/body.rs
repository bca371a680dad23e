//! Axis-aligned boxes and kinematic bodies
//!
//! Shared position/velocity integration for every physical entity. Knockback
//! is a separate horizontal scalar that decays exponentially and snaps to
//! zero below an epsilon so it never micro-decays forever.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GRAVITY, KNOCKBACK_EPSILON, MAX_FALL_SPEED};
use crate::tuning::KnockbackTuning;

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { pos: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Strict overlap test (touching edges do not intersect)
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// A moving body: full sprite extents plus velocity, grounding, knockback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub grounded: bool,
    /// Transient horizontal impulse from being struck
    pub knockback: f32,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, vel: Vec2::ZERO, size, grounded: false, knockback: 0.0 }
    }

    /// Full sprite box (collision probes use the narrower hurt-box)
    pub fn aabb(&self) -> Aabb {
        Aabb { pos: self.pos, size: self.size }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Accumulate gravity, clamped to terminal fall speed
    pub fn apply_gravity(&mut self) {
        self.vel.y += GRAVITY;
        if self.vel.y > MAX_FALL_SPEED {
            self.vel.y = MAX_FALL_SPEED;
        }
    }

    /// Integrate velocity into position (once per tick)
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Apply and decay the knockback scalar.
    ///
    /// Position shifts by `knockback / resistance`, then the scalar decays by
    /// the per-kind factor and snaps to exactly zero under the epsilon.
    pub fn apply_knockback(&mut self, tuning: &KnockbackTuning) {
        if self.knockback == 0.0 {
            return;
        }
        self.pos.x += self.knockback / tuning.resistance;
        self.knockback *= tuning.decay;
        if self.knockback.abs() < KNOCKBACK_EPSILON {
            self.knockback = 0.0;
        }
    }
}
