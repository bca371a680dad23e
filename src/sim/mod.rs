//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` call = one simulation step)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod actor;
pub mod anim;
pub mod behavior;
pub mod body;
pub mod collision;
pub mod combat;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorKind, CombatFlags};
pub use anim::{AnimConfig, AnimEvent, AnimId, Animator, DamageWindow};
pub use body::{Aabb, Body};
pub use collision::{CollisionStyle, Platform, resolve_platforms};
pub use state::{GamePhase, GameState, Particle, Player, Potion, PotionKind};
pub use tick::{TickInput, tick};
