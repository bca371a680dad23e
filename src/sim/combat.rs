//! Combat resolution
//!
//! One symmetric pass over every live attacker/defender pair. A strike lands
//! when the attacker's damage window is open, its per-activation latch is
//! clear, and the attack box overlaps the defender's hurtbox. Damage always
//! applies on a landed strike; the defender's hit cooldown only suppresses
//! the repeat hit flag and knockback, never the health deduction.

use glam::Vec2;

use super::actor::Actor;
use super::state::{GamePhase, GameState, Potion, PotionKind};
use crate::consts::*;
use crate::tuning::knockback_dealt;

/// Resolve all strikes for this tick, then deaths and their consequences.
pub fn resolve(state: &mut GameState) {
    let mut impacts: Vec<Vec2> = Vec::new();

    // Player's swing: the latch inside `strike` means one target per
    // activation, first overlap wins in list order.
    let player_damage = state.player.effective_damage();
    for enemy in state.enemies.iter_mut() {
        if !enemy.active {
            continue;
        }
        if let Some(point) = strike(&mut state.player.actor, enemy, player_damage) {
            impacts.push(point);
        }
    }
    if let Some(boss) = state.boss.as_mut() {
        if let Some(point) = strike(&mut state.player.actor, boss, player_damage) {
            impacts.push(point);
        }
    }

    // Return strikes against the player.
    for enemy in state.enemies.iter_mut() {
        if !enemy.active {
            continue;
        }
        let damage = enemy.damage;
        if let Some(point) = strike(enemy, &mut state.player.actor, damage) {
            impacts.push(point);
        }
    }
    if let Some(boss) = state.boss.as_mut() {
        let damage = boss.damage;
        if let Some(point) = strike(boss, &mut state.player.actor, damage) {
            impacts.push(point);
        }
    }

    for point in impacts {
        state.spawn_hit_particles(point.x, point.y);
    }

    reap(state);
}

/// Attempt one strike. Returns the impact point if it landed.
fn strike(attacker: &mut Actor, defender: &mut Actor, damage: i32) -> Option<Vec2> {
    if !attacker.combat.can_deal_damage || attacker.combat.has_dealt_damage {
        return None;
    }
    let reach = attacker.attack_box();
    let hurtbox = defender.hurtbox();
    if !reach.intersects(&hurtbox) {
        return None;
    }

    // One hit per activation: latch and close the window on the spot.
    attacker.combat.has_dealt_damage = true;
    attacker.combat.can_deal_damage = false;
    defender.health -= damage;
    log::debug!(
        "{:?} hit {:?} for {damage} ({} hp left)",
        attacker.kind,
        defender.kind,
        defender.health
    );

    // A defender still inside its hit cooldown takes the damage but is not
    // re-flagged or shoved again.
    if !defender.combat.is_hit() {
        defender.combat.hit_timer = HIT_COOLDOWN_TICKS;
        let away = if defender.body.center_x() >= attacker.body.center_x() { 1.0 } else { -1.0 };
        defender.body.knockback = away * knockback_dealt(attacker.kind, defender.kind);
    }

    Some(Vec2::new(hurtbox.center_x(), hurtbox.center_y()))
}

/// Remove dead enemies (scoring, potion drops, respawns), resolve the boss
/// kill, and check the player.
fn reap(state: &mut GameState) {
    let mut i = 0;
    while i < state.enemies.len() {
        if state.enemies[i].health > 0 {
            i += 1;
            continue;
        }
        let fallen = state.enemies.remove(i);
        state.score += ENEMY_KILL_SCORE;
        state.kill_count += 1;
        log::info!("enemy down, score {} ({} kills)", state.score, state.kill_count);

        if state.kill_count % POTION_KILL_INTERVAL == 0 {
            let kind = PotionKind::random(&mut state.rng);
            state.potions.push(Potion::new(
                fallen.body.center_x() - POTION_SIZE / 2.0,
                fallen.body.pos.y,
                kind,
            ));
        }
        // Keep the wave topped up until the boss threshold.
        if state.score < BOSS_SPAWN_SCORE {
            state.spawn_replacement_enemy();
        }
    }

    if state.boss.as_ref().is_some_and(|b| b.health <= 0) {
        state.boss = None;
        state.score += BOSS_KILL_SCORE;
        state.phase = GamePhase::Won;
        log::info!("boss defeated, final score {}", state.score);
    }

    if state.player.actor.health <= 0 && state.phase == GamePhase::Running {
        state.phase = GamePhase::Lost;
        log::info!("player defeated at score {}", state.score);
    }
}
