//! Behavior controllers
//!
//! One update function per actor kind. Each follows the same internal order:
//! decide intent, advance the animation state machine, integrate physics,
//! resolve platforms. The player is purely input-reactive; the enemy and
//! boss are distance-tiered state machines over the horizontal gap to the
//! player.

use rand::Rng;
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::anim::{AnimEvent, AnimId};
use super::body::{Aabb, Body};
use super::collision::{Platform, resolve_platforms};
use super::state::Player;
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::{BOSS_AI, ENEMY_AI, PLAYER_CTL};
use crate::Facing;

/// Advance the player one tick from sampled input.
pub fn update_player(player: &mut Player, input: &TickInput, platforms: &[Platform], rng: &mut Pcg32) {
    let ctl = PLAYER_CTL;
    player.move_left = input.left;
    player.move_right = input.right;

    // Edge-triggered commands, each behind its guards.
    if input.attack
        && !player.actor.combat.is_attacking
        && player.actor.attack_cooldown <= 0
        && !player.dashing
    {
        let variant = if rng.random_bool(0.5) { AnimId::Attack } else { AnimId::Attack2 };
        player.actor.start_attack(variant, ctl.attack_cooldown);
    }
    if input.dash && !player.dashing && player.dash_cooldown <= 0 && !player.actor.combat.is_attacking {
        player.dashing = true;
        player.dash_timer = ctl.dash_ticks;
        player.dash_cooldown = ctl.dash_cooldown;
        player.actor.body.vel.y = 0.0;
        player.actor.body.vel.x = player.actor.facing.sign() * ctl.dash_speed;
        player.actor.set_anim(AnimId::Dash);
    }
    if input.jump {
        if player.actor.body.grounded {
            player.actor.body.vel.y = ctl.jump_impulse;
            player.actor.body.grounded = false;
            player.jump_queued = false;
        } else {
            player.jump_queued = true;
            player.jump_buffer = ctl.jump_buffer_ticks;
        }
    }

    // Movement intent (locked out while dashing; attacking roots the player).
    if !player.dashing {
        let attacking = player.actor.combat.is_attacking;
        let speed = if player.speed_buff { ctl.move_speed * SPEED_BUFF_MULT } else { ctl.move_speed };
        if player.move_left && !attacking {
            player.actor.body.vel.x = -speed;
            player.actor.facing = Facing::Left;
            player.actor.set_anim(AnimId::Run);
        } else if player.move_right && !attacking {
            player.actor.body.vel.x = speed;
            player.actor.facing = Facing::Right;
            player.actor.set_anim(AnimId::Run);
        } else {
            player.actor.body.vel.x = 0.0;
            if !attacking {
                player.actor.set_anim(AnimId::Idle);
            }
        }
    } else {
        player.dash_timer -= 1;
        player.actor.body.vel.y = 0.0;
    }

    // Animation; attack completion falls back to movement intent.
    if let Some(AnimEvent::AttackFinished) = player.actor.advance_anim() {
        if player.move_left || player.move_right {
            player.actor.set_anim(AnimId::Run);
        } else {
            player.actor.set_anim(AnimId::Idle);
        }
    }

    // Physics: a dash suspends gravity for its whole duration.
    if !player.dashing {
        player.actor.body.apply_gravity();
    }
    player.actor.body.integrate();
    player.actor.body.apply_knockback(&player.actor.kind.tuning().knockback);

    // Dash ends after its last movement tick.
    if player.dashing && player.dash_timer <= 0 {
        player.dashing = false;
        player.actor.body.vel.x = 0.0;
        player.actor.set_anim(AnimId::Idle);
    }

    let tuning = player.actor.kind.tuning();
    resolve_platforms(&mut player.actor.body, &tuning.hurtbox, platforms, tuning.collision);

    // Consume a buffered jump the instant we touch down.
    if player.jump_queued {
        if player.actor.body.grounded {
            player.actor.body.vel.y = ctl.buffered_jump_impulse;
            player.actor.body.grounded = false;
            player.jump_queued = false;
        } else {
            player.jump_buffer -= 1;
            if player.jump_buffer <= 0 {
                player.jump_queued = false;
            }
        }
    }

    // Timers.
    if player.actor.combat.hit_timer > 0 {
        player.actor.combat.hit_timer -= 1;
    }
    if player.actor.attack_cooldown > 0 {
        player.actor.attack_cooldown -= 1;
    }
    if player.dash_cooldown > 0 {
        player.dash_cooldown -= 1;
    }
    if player.buff_timer > 0 {
        player.buff_timer -= 1;
        if player.buff_timer <= 0 {
            player.speed_buff = false;
            player.power_buff = false;
        }
    }

    player.actor.body.pos.x =
        player.actor.body.pos.x.clamp(0.0, WORLD_WIDTH - player.actor.body.size.x);
}

/// Advance one enemy. Outside the activation radius the enemy is fully
/// dormant: no AI, no physics, no animation.
pub fn update_enemy(enemy: &mut Actor, player: &Actor, platforms: &[Platform]) {
    let ai = ENEMY_AI;
    if enemy.attack_cooldown > 0 {
        enemy.attack_cooldown -= 1;
    }
    if enemy.combat.hit_timer > 0 {
        enemy.combat.hit_timer -= 1;
    }

    let dist = (enemy.center_x() - player.center_x()).abs();
    enemy.active = dist < ai.activation_range;
    if !enemy.active {
        return;
    }

    let in_front = dist < ai.detection_range
        && match enemy.facing {
            Facing::Right => player.body.pos.x > enemy.body.pos.x,
            Facing::Left => player.body.pos.x < enemy.body.pos.x,
        };

    enemy.body.vel.x = 0.0;
    if !enemy.combat.is_attacking {
        if in_front {
            if dist > ai.melee_range {
                enemy.set_anim(AnimId::Walk);
                enemy.body.vel.x = enemy.facing.sign() * ai.move_speed;
            } else if enemy.attack_cooldown <= 0 {
                enemy.start_attack(AnimId::Attack, ai.attack_cooldown);
            } else {
                enemy.set_anim(AnimId::Idle);
            }
        } else {
            enemy.facing = Facing::toward(enemy.body.pos.x, player.body.pos.x);
            enemy.set_anim(AnimId::Idle);
        }
    }

    // Hop instead of walking off an edge.
    if enemy.body.grounded && no_footing_ahead(&enemy.body, enemy.facing, platforms) {
        enemy.body.vel.y = ai.jump_impulse;
        enemy.body.grounded = false;
    }

    if let Some(AnimEvent::AttackFinished) = enemy.advance_anim() {
        enemy.set_anim(AnimId::Idle);
    }

    let tuning = enemy.kind.tuning();
    enemy.body.apply_gravity();
    enemy.body.integrate();
    enemy.body.apply_knockback(&tuning.knockback);
    resolve_platforms(&mut enemy.body, &tuning.hurtbox, platforms, tuning.collision);

    enemy.body.pos.x = enemy.body.pos.x.clamp(0.0, WORLD_WIDTH - enemy.body.size.x);
}

/// Advance the boss: continuous pursuit with no dormancy, and a one-way
/// enrage below half health.
pub fn update_boss(boss: &mut Actor, player: &Actor, platforms: &[Platform]) {
    if !boss.enraged && boss.health < boss.max_health / 2 {
        boss.enraged = true;
        log::info!("boss enraged at {} hp", boss.health);
    }
    if boss.attack_cooldown > 0 {
        boss.attack_cooldown -= 1;
    }
    if boss.combat.hit_timer > 0 {
        boss.combat.hit_timer -= 1;
    }

    let ai = BOSS_AI;
    let dist = (boss.center_x() - player.center_x()).abs();
    let speed = ai.speed(boss.enraged);

    boss.body.vel.x = 0.0;
    if !boss.combat.is_attacking {
        if dist > ai.chase_range {
            boss.facing = Facing::toward(boss.center_x(), player.center_x());
            boss.set_anim(AnimId::Walk);
            boss.body.vel.x = boss.facing.sign() * speed;
        } else if dist > ai.attack_range(boss.enraged) {
            boss.facing = Facing::toward(boss.center_x(), player.center_x());
            boss.set_anim(AnimId::Walk);
            boss.body.vel.x = boss.facing.sign() * speed * ai.approach_factor;
        } else if boss.attack_cooldown <= 0 {
            boss.facing = Facing::toward(boss.center_x(), player.center_x());
            boss.start_attack(AnimId::Attack, ai.attack_delay(boss.enraged));
        } else {
            boss.set_anim(AnimId::Idle);
        }
    }

    if let Some(AnimEvent::AttackFinished) = boss.advance_anim() {
        boss.set_anim(AnimId::Idle);
    }

    let tuning = boss.kind.tuning();
    boss.body.apply_gravity();
    boss.body.integrate();
    boss.body.apply_knockback(&tuning.knockback);
    resolve_platforms(&mut boss.body, &tuning.hurtbox, platforms, tuning.collision);
}

/// Probe a small box just past the leading edge, below the feet. No platform
/// there means the next step is a drop.
fn no_footing_ahead(body: &Body, facing: Facing, platforms: &[Platform]) -> bool {
    let front_x = match facing {
        Facing::Right => body.pos.x + body.size.x + 5.0,
        Facing::Left => body.pos.x - 5.0,
    };
    let probe = Aabb::new(front_x, body.pos.y + body.size.y + 5.0, 4.0, 4.0);
    !platforms.iter().any(|p| probe.intersects(&p.rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::ActorKind;

    /// Wide floor so actors can settle and walk.
    fn floor() -> Vec<Platform> {
        vec![Platform::new(-1000.0, 500.0, 8000.0, 60.0)]
    }

    fn grounded_enemy(x: f32) -> Actor {
        let mut enemy = Actor::new(ActorKind::Enemy, x, 500.0 - 128.0);
        enemy.body.grounded = true;
        enemy
    }

    fn grounded_player(x: f32) -> Actor {
        let mut player = Actor::new(ActorKind::Player, x, 500.0 - 160.0);
        player.body.grounded = true;
        player
    }

    #[test]
    fn enemy_dormant_outside_activation_radius() {
        let platforms = floor();
        let player = grounded_player(3000.0);
        let mut enemy = grounded_enemy(100.0);
        let start = enemy.body.pos;

        update_enemy(&mut enemy, &player, &platforms);
        assert!(!enemy.active);
        // No physics at all while dormant.
        assert_eq!(enemy.body.pos, start);
        assert_eq!(enemy.anim.frame, 0);
    }

    #[test]
    fn enemy_walks_toward_player_in_front() {
        let platforms = floor();
        let player = grounded_player(700.0);
        let mut enemy = grounded_enemy(100.0);
        enemy.facing = Facing::Right;

        update_enemy(&mut enemy, &player, &platforms);
        assert!(enemy.active);
        assert_eq!(enemy.anim.id, AnimId::Walk);
        assert!(enemy.body.pos.x > 100.0);
    }

    #[test]
    fn enemy_turns_to_face_player_behind_it() {
        let platforms = floor();
        let player = grounded_player(100.0);
        let mut enemy = grounded_enemy(600.0);
        enemy.facing = Facing::Right; // player is behind

        update_enemy(&mut enemy, &player, &platforms);
        assert_eq!(enemy.facing, Facing::Left);
        assert_eq!(enemy.anim.id, AnimId::Idle);
        assert!(!enemy.combat.is_attacking);
    }

    #[test]
    fn enemy_attacks_in_melee_range_when_cooldown_elapsed() {
        let platforms = floor();
        let player = grounded_player(220.0);
        let mut enemy = grounded_enemy(200.0);
        enemy.facing = Facing::Right;

        update_enemy(&mut enemy, &player, &platforms);
        assert!(enemy.combat.is_attacking);
        assert_eq!(enemy.anim.id, AnimId::Attack);
        assert_eq!(enemy.attack_cooldown, ENEMY_AI.attack_cooldown);

        // Idles, not re-attacks, while the cooldown is running.
        let mut other = grounded_enemy(200.0);
        other.facing = Facing::Right;
        other.attack_cooldown = 100;
        update_enemy(&mut other, &player, &platforms);
        assert!(!other.combat.is_attacking);
        assert_eq!(other.anim.id, AnimId::Idle);
    }

    #[test]
    fn enemy_hops_at_platform_edge() {
        // Narrow ledge ending right at the enemy's leading edge.
        let platforms = vec![Platform::new(0.0, 500.0, 292.0, 20.0)];
        let player = grounded_player(600.0);
        let mut enemy = grounded_enemy(100.0);
        enemy.facing = Facing::Right;

        update_enemy(&mut enemy, &player, &platforms);
        // Jump impulse fired: moving up, airborne.
        assert!(enemy.body.vel.y < 0.0);
        assert!(!enemy.body.grounded);
    }

    #[test]
    fn boss_enrage_is_one_way() {
        let platforms = floor();
        let player = grounded_player(2000.0);
        let mut boss = Actor::new(ActorKind::Boss, 100.0, 500.0 - 192.0);

        boss.health = 499;
        update_boss(&mut boss, &player, &platforms);
        assert!(boss.enraged);

        // Even if health somehow rises again, the flag never resets.
        boss.health = 1000;
        update_boss(&mut boss, &player, &platforms);
        assert!(boss.enraged);
    }

    #[test]
    fn boss_chases_at_full_speed_then_approaches_slower() {
        let platforms = floor();
        let player = grounded_player(2000.0);

        let mut far = Actor::new(ActorKind::Boss, 100.0, 500.0 - 192.0);
        update_boss(&mut far, &player, &platforms);
        let chase_step = far.body.pos.x - 100.0;
        assert!((chase_step - BOSS_AI.speed).abs() < 1e-4);

        // Inside the chase band but outside attack range: reduced speed.
        let near_x = 2000.0 + 240.0 / 2.0 - 288.0 / 2.0 - 250.0;
        let mut near = Actor::new(ActorKind::Boss, near_x, 500.0 - 192.0);
        update_boss(&mut near, &player, &platforms);
        let approach_step = near.body.pos.x - near_x;
        assert!((approach_step - BOSS_AI.speed * BOSS_AI.approach_factor).abs() < 1e-4);
    }

    #[test]
    fn boss_attacks_in_range_facing_player() {
        let platforms = floor();
        let player = grounded_player(100.0);
        let mut boss = Actor::new(ActorKind::Boss, 150.0, 500.0 - 192.0);

        update_boss(&mut boss, &player, &platforms);
        assert!(boss.combat.is_attacking);
        assert_eq!(boss.facing, Facing::Left);
        assert_eq!(boss.attack_cooldown, BOSS_AI.attack_delay);
    }
}
