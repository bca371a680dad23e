//! Generic animation state machine
//!
//! One `Animator` drives every actor kind; the differences between Player,
//! Enemy, and Boss are entirely in the `tuning::anim_config` tables. The
//! animator owns the frame counter and opens/closes the damage window as the
//! frame index crosses the configured range.

use serde::{Deserialize, Serialize};

use super::actor::CombatFlags;

/// Animation states across all actor kinds. Each kind only ever enters its
/// own closed subset (Player: Idle/Run/Dash/Attack/Attack2, Enemy and Boss:
/// Idle/Walk/Attack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimId {
    Idle,
    Run,
    Walk,
    Dash,
    Attack,
    Attack2,
}

impl AnimId {
    #[inline]
    pub fn is_attack(self) -> bool {
        matches!(self, AnimId::Attack | AnimId::Attack2)
    }
}

/// Frame range of an attack animation during which a hit can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageWindow {
    pub start: u32,
    pub end: u32,
}

/// Per-state animation parameters.
#[derive(Debug, Clone, Copy)]
pub struct AnimConfig {
    /// Sprite frame count
    pub frames: u32,
    /// Ticks per frame
    pub frame_ticks: u32,
    /// Damage window, attack states only
    pub window: Option<DamageWindow>,
}

impl AnimConfig {
    pub const fn looping(frames: u32, frame_ticks: u32) -> Self {
        Self { frames, frame_ticks, window: None }
    }

    pub const fn attack(frames: u32, frame_ticks: u32, window: DamageWindow) -> Self {
        Self { frames, frame_ticks, window: Some(window) }
    }
}

/// Emitted by `Animator::advance` when an attack animation wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimEvent {
    AttackFinished,
}

/// Discrete animation state: which clip is playing, and where in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animator {
    pub id: AnimId,
    pub frame: u32,
    pub timer: u32,
}

impl Animator {
    pub fn new(id: AnimId) -> Self {
        Self { id, frame: 0, timer: 0 }
    }

    /// Change state, resetting frame and timer. Re-entering the current
    /// state is a no-op.
    pub fn set(&mut self, id: AnimId) {
        if self.id == id {
            return;
        }
        self.id = id;
        self.frame = 0;
        self.timer = 0;
    }

    /// Force a state change with a frame/timer reset even when the state is
    /// already active (a fresh attack must start from frame zero).
    pub fn restart(&mut self, id: AnimId) {
        self.id = id;
        self.frame = 0;
        self.timer = 0;
    }

    /// Advance one tick. When the frame index crosses the configured damage
    /// window the combat flags are toggled; when an attack animation wraps,
    /// the attack flags are cleared and `AttackFinished` is returned.
    pub fn advance(&mut self, cfg: &AnimConfig, combat: &mut CombatFlags) -> Option<AnimEvent> {
        // A zero frame count or duration would never wrap; refuse to advance
        // rather than leave an attack stuck mid-swing.
        if cfg.frames == 0 || cfg.frame_ticks == 0 {
            return None;
        }

        self.timer += 1;
        if self.timer < cfg.frame_ticks {
            return None;
        }
        self.timer = 0;
        self.frame += 1;

        if combat.is_attacking {
            if let Some(window) = cfg.window {
                if self.frame == window.start && !combat.can_deal_damage {
                    combat.can_deal_damage = true;
                    combat.has_dealt_damage = false;
                } else if self.frame > window.end && combat.can_deal_damage {
                    combat.can_deal_damage = false;
                }
            }
        }

        if self.frame >= cfg.frames {
            self.frame = 0;
            if self.id.is_attack() {
                combat.is_attacking = false;
                combat.can_deal_damage = false;
                combat.has_dealt_damage = false;
                return Some(AnimEvent::AttackFinished);
            }
        }

        None
    }
}
