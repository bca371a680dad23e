//! Render snapshot
//!
//! A flat, read-only view of one simulation tick for the drawing layer.
//! Everything a renderer needs is precomputed here (sprite-sheet source
//! rects, hit flashes, aura flags) so it never reaches back into the
//! simulation.

use glam::Vec2;
use serde::Serialize;

use crate::sim::actor::Actor;
use crate::sim::anim::AnimId;
use crate::sim::state::{GamePhase, GameState, PotionKind};
use crate::Facing;

/// Horizontal strip layout: frame `n` is at `x = n * frame_width`, row 0.
pub fn source_rect(frame: u32, frame_width: u32, frame_height: u32) -> [u32; 4] {
    [frame * frame_width, 0, frame_width, frame_height]
}

#[derive(Debug, Clone, Serialize)]
pub struct ActorView {
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub anim: AnimId,
    /// Source rect into the sprite sheet for the current frame
    pub source_rect: [u32; 4],
    pub health: i32,
    pub max_health: i32,
    /// White-flash overlay while the hit flag is set
    pub hit_flash: bool,
    /// Boss only: tint while enraged
    pub enrage_aura: bool,
}

impl ActorView {
    fn of(actor: &Actor) -> Self {
        let tuning = actor.kind.tuning();
        Self {
            pos: actor.body.pos,
            size: actor.body.size,
            facing: actor.facing,
            anim: actor.anim.id,
            source_rect: source_rect(actor.anim.frame, tuning.frame_width, tuning.frame_height),
            // Health can momentarily sit below zero between the strike and
            // the death sweep; never show that.
            health: actor.health.max(0),
            max_health: actor.max_health,
            hit_flash: actor.combat.is_hit(),
            enrage_aura: actor.enraged,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformView {
    pub pos: Vec2,
    pub size: Vec2,
    /// Invisible collision geometry; skipped by the renderer
    pub transparent: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PotionView {
    pub pos: Vec2,
    pub kind: PotionKind,
    pub frame: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    /// Remaining lifetime, for fade-out
    pub life: i32,
}

/// Everything drawn for one tick.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub camera_x: f32,
    pub score: u32,
    pub kill_count: u32,
    pub speed_buff: bool,
    pub power_buff: bool,
    pub player: ActorView,
    pub enemies: Vec<ActorView>,
    pub boss: Option<ActorView>,
    pub platforms: Vec<PlatformView>,
    pub potions: Vec<PotionView>,
    pub particles: Vec<ParticleView>,
}

/// Flatten the current state into a drawable snapshot. Dormant enemies are
/// included (they are still visible, just not simulated).
pub fn capture(state: &GameState) -> Snapshot {
    Snapshot {
        phase: state.phase,
        camera_x: state.camera_x,
        score: state.score,
        kill_count: state.kill_count,
        speed_buff: state.player.speed_buff,
        power_buff: state.player.power_buff,
        player: ActorView::of(&state.player.actor),
        enemies: state.enemies.iter().map(ActorView::of).collect(),
        boss: state.boss.as_ref().map(ActorView::of),
        platforms: state
            .platforms
            .iter()
            .map(|p| PlatformView { pos: p.rect.pos, size: p.rect.size, transparent: p.transparent })
            .collect(),
        potions: state
            .potions
            .iter()
            .map(|p| PotionView { pos: p.pos, kind: p.kind, frame: p.frame })
            .collect(),
        particles: state
            .particles
            .iter()
            .map(|p| ParticleView { pos: p.pos, life: p.life })
            .collect(),
    }
}
