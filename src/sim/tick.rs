//! Fixed-timestep orchestrator
//!
//! `tick` advances the whole game exactly one simulation step. Order matters
//! and is fixed: player, enemies, boss, combat, boss spawn, potions, sky
//! drops, particles, camera. Given the same seed and the same input
//! sequence, the resulting state is bit-identical.

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorKind};
use super::behavior;
use super::combat;
use super::state::{GamePhase, GameState, Player, Potion, PotionKind};
use crate::consts::*;
use rand::Rng;

/// Input sampled for one tick. Movement fields are level-triggered; the
/// command fields are edge-triggered by the caller.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub attack: bool,
    pub dash: bool,
    pub restart: bool,
}

/// Advance the simulation by one step.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        log::info!("run restarted (seed {})", state.seed);
        *state = GameState::new(state.seed);
        return;
    }
    // Won/Lost freeze everything except restart.
    if state.phase != GamePhase::Running {
        return;
    }
    state.time_ticks += 1;

    behavior::update_player(&mut state.player, input, &state.platforms, &mut state.rng);
    for enemy in state.enemies.iter_mut() {
        behavior::update_enemy(enemy, &state.player.actor, &state.platforms);
    }
    if let Some(boss) = state.boss.as_mut() {
        behavior::update_boss(boss, &state.player.actor, &state.platforms);
    }

    combat::resolve(state);

    spawn_boss_if_due(state);
    update_potions(state);
    update_particles(state);

    state.camera_x = (state.player.actor.body.pos.x - 800.0).max(0.0);
}

/// One-shot boss spawn at the score threshold. All remaining enemies vanish;
/// the flag latches so a later crossing can never spawn a second boss. The
/// kill that crosses the threshold can also be the one that fells the
/// player, so a terminal phase blocks the spawn.
fn spawn_boss_if_due(state: &mut GameState) {
    if state.phase != GamePhase::Running || state.boss_spawned || state.score < BOSS_SPAWN_SCORE {
        return;
    }
    state.boss_spawned = true;
    state.enemies.clear();
    let x = state.camera_x + 1000.0;
    state.boss = Some(Actor::new(ActorKind::Boss, x, 50.0));
    state.boss_drop_timer = 0;
    log::info!("boss spawned at x {x:.0}");
}

/// Potions fall, land, animate, and get picked up; the boss fight also rains
/// one from the sky on a fixed cadence.
fn update_potions(state: &mut GameState) {
    if state.boss.is_some() {
        state.boss_drop_timer += 1;
        if state.boss_drop_timer >= BOSS_POTION_DROP_TICKS {
            state.boss_drop_timer = 0;
            let kind = PotionKind::random(&mut state.rng);
            let x = state.camera_x + state.rng.random_range(50.0..VIEW_WIDTH - 50.0);
            state.potions.push(Potion::new(x, 0.0, kind));
        }
    }

    let player_box = state.player.actor.hurtbox();
    for potion in state.potions.iter_mut() {
        potion.animate();
        potion.pos.y += POTION_FALL_SPEED;
        for platform in &state.platforms {
            if potion.bounds().intersects(&platform.rect) {
                potion.pos.y = platform.rect.pos.y - POTION_SIZE;
                break;
            }
        }
        if player_box.intersects(&potion.bounds()) {
            potion.collected = true;
            apply_potion(&mut state.player, potion.kind);
        }
    }
    state.potions.retain(|p| !p.collected);
}

fn apply_potion(player: &mut Player, kind: PotionKind) {
    log::debug!("picked up {kind:?} potion");
    match kind {
        PotionKind::Health => {
            player.actor.health =
                (player.actor.health + HEALTH_POTION_RESTORE).min(player.actor.max_health);
        }
        PotionKind::Speed => {
            player.speed_buff = true;
            player.buff_timer = BUFF_DURATION_TICKS;
        }
        PotionKind::Power => {
            player.power_buff = true;
            player.buff_timer = BUFF_DURATION_TICKS;
        }
    }
}

/// Cosmetic hit sparks: ballistic drift, short lifetime.
fn update_particles(state: &mut GameState) {
    for particle in state.particles.iter_mut() {
        particle.vel.y += 0.3;
        particle.vel.x *= 0.95;
        particle.pos += particle.vel;
        particle.life -= 1;
    }
    state.particles.retain(|p| p.life > 0);
}
