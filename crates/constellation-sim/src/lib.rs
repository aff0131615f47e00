//! Simulation engine for the constellation game.
//!
//! Headless and deterministic: all randomness flows through one seeded
//! `ChaCha8Rng` owned by [`engine::GameEngine`], so the same seed and
//! action sequence reproduce the same snapshot stream. The engine is the
//! only writer of game state; collaborators read snapshots and submit
//! `PlayerAction`s.

pub mod coverage;
pub mod engine;
pub mod events;
pub mod modifiers;
pub mod orbit;
pub mod turn;
