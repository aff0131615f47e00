//! Messages accepted by the game-loop thread.

use constellation_core::commands::PlayerAction;

/// Commands consumed by the game loop.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    /// Forward a player action to the engine.
    Action(PlayerAction),
    /// Stop the loop and let the thread exit.
    Shutdown,
}
