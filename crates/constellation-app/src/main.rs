//! Headless demo run: plays a short scripted game against the engine and
//! samples the orbital field the way a renderer would.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use constellation_app::game_loop::{spawn_game_loop, LoopConfig};
use constellation_app::state::GameLoopCommand;
use constellation_core::commands::PlayerAction;
use constellation_core::enums::{AntennaType, OrbitalShell};
use constellation_sim::orbit::OrbitTracker;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let latest_snapshot = Arc::new(Mutex::new(None));
    let config = LoopConfig {
        seed: 42,
        auto_turn: Some(Duration::from_millis(400)),
    };
    let (tx, handle) = spawn_game_loop(config, Arc::clone(&latest_snapshot));

    tx.send(GameLoopCommand::Action(PlayerAction::NewGame))
        .expect("game loop alive");
    tx.send(GameLoopCommand::Action(PlayerAction::SaveDesign {
        id: None,
        name: "Pathfinder".into(),
        shell: OrbitalShell::Leo550,
        antenna: AntennaType::Regional,
    }))
    .expect("game loop alive");

    // Let the design land, then launch a starter constellation.
    std::thread::sleep(Duration::from_millis(100));
    let design_id = latest_snapshot
        .lock()
        .unwrap()
        .as_ref()
        .and_then(|s| s.designs.first().map(|d| d.id))
        .expect("design saved");
    tx.send(GameLoopCommand::Action(PlayerAction::LaunchSatellites {
        design_id,
        quantity: 5,
    }))
    .expect("game loop alive");

    // Render-side sampling: an independent cadence that reads snapshots
    // and drives its own tracker off the cached plane transforms.
    let mut tracker = OrbitTracker::new();
    for _ in 0..120 {
        std::thread::sleep(Duration::from_millis(16));
        if let Some(snapshot) = latest_snapshot.lock().unwrap().clone() {
            let points = tracker.advance(&snapshot.satellites, 0.016);
            if let Some(point) = points.first() {
                info!(
                    sats = points.len(),
                    x = point.position.x as f64,
                    y = point.position.y as f64,
                    z = point.position.z as f64,
                    "field sample"
                );
            }
        }
    }

    if let Some(snapshot) = latest_snapshot.lock().unwrap().clone() {
        info!(
            month = %snapshot.month,
            budget = snapshot.budget,
            coverage = snapshot.coverage,
            events = snapshot.event_log.len(),
            "final state"
        );
        for entry in snapshot.event_log.iter().rev() {
            info!(turn = entry.turn, title = %entry.title, effect = %entry.effect_desc, "event");
        }
    }

    tx.send(GameLoopCommand::Shutdown).expect("game loop alive");
    handle.join().expect("game loop thread panicked");
}
