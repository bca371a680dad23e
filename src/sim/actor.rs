//! Actors: the shared fields and combat geometry of Player, Enemy, and Boss
//!
//! One struct covers all three kinds; everything kind-specific is either a
//! tuning-table lookup or, for the player's controls, carried by the
//! `state::Player` wrapper.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{AnimEvent, AnimId, Animator};
use super::body::{Aabb, Body};
use crate::tuning::{self, AttackAnchor};
use crate::Facing;

/// The three actor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Enemy,
    Boss,
}

/// Per-actor combat state.
///
/// Invariants:
/// - `can_deal_damage` is true only while an attack animation is inside its
///   damage window; any state change or attack completion forces it false.
/// - `has_dealt_damage` latches on the first landed hit of an attack and
///   resets only when a new attack starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatFlags {
    pub is_attacking: bool,
    pub can_deal_damage: bool,
    pub has_dealt_damage: bool,
    /// Ticks remaining on the hit flag; > 0 means recently struck
    pub hit_timer: i32,
}

impl CombatFlags {
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.hit_timer > 0
    }
}

/// A live combat entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub kind: ActorKind,
    pub body: Body,
    pub facing: Facing,
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    pub anim: Animator,
    pub combat: CombatFlags,
    pub attack_cooldown: i32,
    /// Enemy only: false while the player is outside the activation radius
    pub active: bool,
    /// Boss only: one-way aggression flag, set below half health
    pub enraged: bool,
}

impl Actor {
    pub fn new(kind: ActorKind, x: f32, y: f32) -> Self {
        let t = kind.tuning();
        Self {
            kind,
            body: Body::new(Vec2::new(x, y), Vec2::new(t.width, t.height)),
            facing: Facing::Right,
            health: t.max_health,
            max_health: t.max_health,
            damage: t.damage,
            anim: Animator::new(AnimId::Idle),
            combat: CombatFlags::default(),
            attack_cooldown: 0,
            active: true,
            enraged: false,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.body.center_x()
    }

    /// Change animation state. The damage window never survives a state
    /// change.
    pub fn set_anim(&mut self, id: AnimId) {
        if self.anim.id != id {
            self.combat.can_deal_damage = false;
            self.anim.set(id);
        }
    }

    /// Begin an attack: restart the animation from frame zero, reset the
    /// single-hit latch, arm the cooldown.
    ///
    /// A window whose range starts at frame 0 (the Enemy's whole-swing
    /// window) is live immediately; frame 0 is never reached by an advance.
    pub fn start_attack(&mut self, id: AnimId, cooldown: i32) {
        self.anim.restart(id);
        self.combat.is_attacking = true;
        self.combat.has_dealt_damage = false;
        let cfg = tuning::anim_config(self.kind, id);
        self.combat.can_deal_damage = cfg.window.is_some_and(|w| w.start == 0);
        self.attack_cooldown = cooldown;
    }

    /// Advance the animation one tick using this actor's tuning table.
    pub fn advance_anim(&mut self) -> Option<AnimEvent> {
        let cfg = tuning::anim_config(self.kind, self.anim.id);
        self.anim.advance(&cfg, &mut self.combat)
    }

    /// Where this actor can be struck: a narrower box sharing the sprite's
    /// bottom edge.
    pub fn hurtbox(&self) -> Aabb {
        let spec = self.kind.tuning().hurtbox;
        let w = self.body.size.x * spec.w_frac;
        let h = self.body.size.y * spec.h_frac;
        Aabb::new(
            self.body.pos.x + (self.body.size.x - w) / 2.0,
            self.body.pos.y + self.body.size.y * spec.top_frac,
            w,
            h,
        )
    }

    /// This actor's attack reach, biased in the facing direction.
    pub fn attack_box(&self) -> Aabb {
        let spec = self.kind.tuning().attack_box;
        let w = self.body.size.x * spec.w_frac;
        let h = self.body.size.y * spec.h_frac;
        let x = match spec.anchor {
            AttackAnchor::Pivot(pivot_frac) => {
                let pivot = self.body.pos.x + self.body.size.x * pivot_frac;
                match self.facing {
                    Facing::Right => pivot,
                    Facing::Left => pivot - w,
                }
            }
            AttackAnchor::Center { forward_frac } => {
                self.body.pos.x
                    + (self.body.size.x - w) / 2.0
                    + self.facing.sign() * self.body.size.x * forward_frac
            }
        };
        Aabb::new(x, self.body.pos.y + self.body.size.y * spec.top_frac, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_attack_box_flips_with_facing() {
        let mut player = Actor::new(ActorKind::Player, 0.0, 0.0);

        player.facing = Facing::Right;
        let right = player.attack_box();
        // Anchored at x + 0.4w, extending forward.
        assert_eq!(right.left(), 240.0 * 0.4);
        assert_eq!(right.size.x, 240.0 * 0.5);

        player.facing = Facing::Left;
        let left = player.attack_box();
        assert_eq!(left.right(), 240.0 * 0.4);
    }

    #[test]
    fn boss_attack_box_shifts_forward() {
        let mut boss = Actor::new(ActorKind::Boss, 0.0, 0.0);

        boss.facing = Facing::Right;
        let right = boss.attack_box();
        boss.facing = Facing::Left;
        let left = boss.attack_box();
        // Centered box shifted by ±0.1 width.
        assert!((right.left() - left.left() - 2.0 * 288.0 * 0.1).abs() < 1e-4);
    }

    #[test]
    fn hurtbox_bottom_matches_sprite_bottom() {
        for kind in [ActorKind::Player, ActorKind::Enemy, ActorKind::Boss] {
            let actor = Actor::new(kind, 10.0, 20.0);
            let hurt = actor.hurtbox();
            assert!(
                (hurt.bottom() - actor.body.aabb().bottom()).abs() < 1e-4,
                "{kind:?} hurtbox must share the sprite's feet"
            );
        }
    }

    #[test]
    fn start_attack_resets_single_hit_latch() {
        let mut enemy = Actor::new(ActorKind::Enemy, 0.0, 0.0);
        enemy.combat.has_dealt_damage = true;

        enemy.start_attack(AnimId::Attack, 150);
        assert!(enemy.combat.is_attacking);
        assert!(!enemy.combat.has_dealt_damage);
        // Enemy window starts at frame 0, so it is live immediately.
        assert!(enemy.combat.can_deal_damage);
        assert_eq!(enemy.attack_cooldown, 150);
        assert_eq!(enemy.anim.frame, 0);
    }

    #[test]
    fn player_window_not_live_at_attack_start() {
        let mut player = Actor::new(ActorKind::Player, 0.0, 0.0);
        player.start_attack(AnimId::Attack, 10);
        assert!(player.combat.is_attacking);
        assert!(!player.combat.can_deal_damage);
    }

    #[test]
    fn set_anim_closes_damage_window() {
        let mut enemy = Actor::new(ActorKind::Enemy, 0.0, 0.0);
        enemy.start_attack(AnimId::Attack, 150);
        assert!(enemy.combat.can_deal_damage);

        enemy.set_anim(AnimId::Idle);
        assert!(!enemy.combat.can_deal_damage);
    }
}
