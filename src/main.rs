//! Headless demo driver
//!
//! Runs a scripted input sequence against the simulation at 60 Hz semantics
//! (no wall-clock pacing) and prints a JSON run summary. Useful for smoke
//! testing balance changes and for demonstrating determinism:
//!
//! ```text
//! bonefall [seed] [ticks]
//! ```

use bonefall::consts::TICK_HZ;
use bonefall::{snapshot, GamePhase, GameState, TickInput, tick};

fn scripted_input(step: u64) -> TickInput {
    // Hold right, hop every half second, swing every 20 ticks, dash on a
    // longer cadence. Crude, but it clears enemies and finds the boss.
    TickInput {
        right: true,
        jump: step % 30 == 0,
        attack: step % 20 == 0,
        dash: step % 90 == 0,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(2024);
    let max_ticks: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(3600);

    log::info!("running seed {seed} for up to {max_ticks} ticks");
    let mut state = GameState::new(seed);

    for step in 0..max_ticks {
        tick(&mut state, &scripted_input(step));

        if step % u64::from(TICK_HZ) == 0 {
            let view = snapshot::capture(&state);
            log::debug!(
                "t={} score={} hp={} enemies={} boss={}",
                state.time_ticks,
                view.score,
                view.player.health,
                view.enemies.len(),
                view.boss.is_some(),
            );
        }
        if state.phase != GamePhase::Running {
            break;
        }
    }

    let summary = serde_json::json!({
        "seed": state.seed,
        "ticks": state.time_ticks,
        "phase": format!("{:?}", state.phase),
        "score": state.score,
        "kills": state.kill_count,
        "player_hp": state.player.actor.health,
        "boss_spawned": state.boss_spawned,
    });
    println!("{summary}");
}
