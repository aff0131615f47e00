//! Game loop thread — applies actions and publishes snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot is
//! stored in shared state for synchronous polling by collaborators.
//!
//! The optional auto-turn timer implements the periodic revenue tick: it
//! only fires while the game is in the `Playing` phase, re-arms whenever
//! the phase is entered, and dies with the loop — after `Shutdown` (or
//! channel disconnect) no timer can touch the discarded state.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use constellation_core::enums::GamePhase;
use constellation_core::state::GameSnapshot;
use constellation_sim::engine::{GameEngine, SimConfig};

use crate::state::GameLoopCommand;

/// Loop cadence. Snapshots are republished at this rate.
const TICK_DURATION: Duration = Duration::from_millis(33);

/// Configuration for the game loop.
pub struct LoopConfig {
    /// RNG seed handed to the engine.
    pub seed: u64,
    /// Advance a turn automatically at this interval while playing.
    /// `None` leaves turn advancement entirely to explicit actions.
    pub auto_turn: Option<Duration>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            auto_turn: None,
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender. Dropping it (or sending `Shutdown`) stops
/// the loop; the returned join handle observes the exit.
pub fn spawn_game_loop(
    config: LoopConfig,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, std::thread::JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("constellation-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: LoopConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut engine = GameEngine::new(SimConfig { seed: config.seed });
    let mut next_tick_time = Instant::now();
    let mut next_auto_turn: Option<Instant> = None;

    info!(seed = config.seed, "game loop started");

    loop {
        // 1. Drain all pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Action(action)) => {
                    debug!(?action, "applying action");
                    engine.apply(action);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Auto-turn timer, armed only during the Playing phase.
        if let Some(interval) = config.auto_turn {
            if engine.phase() == GamePhase::Playing {
                let deadline = *next_auto_turn.get_or_insert_with(|| Instant::now() + interval);
                if Instant::now() >= deadline {
                    engine.apply(constellation_core::commands::PlayerAction::AdvanceTurn);
                    let state = engine.state();
                    info!(
                        turn = state.turn,
                        budget = state.budget,
                        coverage = state.coverage,
                        "auto-advanced turn"
                    );
                    next_auto_turn = Some(Instant::now() + interval);
                }
            } else {
                // Leaving Playing disarms the timer; re-entering re-arms
                // it with a full interval.
                next_auto_turn = None;
            }
        }

        // 3. Publish the latest snapshot for synchronous polling.
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(engine.snapshot());
        }

        // 4. Sleep until the next tick.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral.
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_core::commands::PlayerAction;
    use constellation_core::enums::{AntennaType, OrbitalShell};

    fn wait_for<F: Fn(&GameSnapshot) -> bool>(
        slot: &Arc<Mutex<Option<GameSnapshot>>>,
        predicate: F,
        timeout: Duration,
    ) -> GameSnapshot {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(snapshot) = slot.lock().unwrap().clone() {
                if predicate(&snapshot) {
                    return snapshot;
                }
            }
            assert!(Instant::now() < deadline, "timed out waiting for snapshot");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_loop_publishes_snapshots_and_applies_actions() {
        let slot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(LoopConfig::default(), Arc::clone(&slot));

        tx.send(GameLoopCommand::Action(PlayerAction::NewGame)).unwrap();
        tx.send(GameLoopCommand::Action(PlayerAction::SaveDesign {
            id: None,
            name: "Loop Test".into(),
            shell: OrbitalShell::Leo550,
            antenna: AntennaType::Narrow,
        }))
        .unwrap();

        let snapshot = wait_for(
            &slot,
            |s| s.phase == GamePhase::Playing && !s.designs.is_empty(),
            Duration::from_secs(2),
        );
        assert_eq!(snapshot.designs[0].name, "Loop Test");

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_auto_turn_fires_only_while_playing() {
        let slot = Arc::new(Mutex::new(None));
        let config = LoopConfig {
            seed: 7,
            auto_turn: Some(Duration::from_millis(30)),
        };
        let (tx, handle) = spawn_game_loop(config, Arc::clone(&slot));

        // At the main menu the timer must not advance anything.
        std::thread::sleep(Duration::from_millis(150));
        let menu_snapshot = wait_for(&slot, |_| true, Duration::from_secs(2));
        assert_eq!(menu_snapshot.turn, 0);

        tx.send(GameLoopCommand::Action(PlayerAction::NewGame)).unwrap();
        let playing = wait_for(&slot, |s| s.turn >= 2, Duration::from_secs(2));
        assert!(playing.turn >= 2);

        // Back at the menu the timer is disarmed again.
        tx.send(GameLoopCommand::Action(PlayerAction::ReturnToMenu))
            .unwrap();
        let paused = wait_for(
            &slot,
            |s| s.phase == GamePhase::MainMenu,
            Duration::from_secs(2),
        );
        let frozen_turn = paused.turn;
        std::thread::sleep(Duration::from_millis(150));
        let still = wait_for(&slot, |_| true, Duration::from_secs(2));
        assert_eq!(still.turn, frozen_turn);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_loop_exits_on_channel_disconnect() {
        let slot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(LoopConfig::default(), Arc::clone(&slot));
        drop(tx);
        handle.join().unwrap();
    }
}
