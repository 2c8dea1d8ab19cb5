//! Player commands sent from the input/presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Movement,
//! aim, and trigger commands update the held [`PlayerInput`] state; the
//! control system consumes that state every tick.
//!
//! [`PlayerInput`]: crate::components::PlayerInput

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session (from the title or result screen).
    StartGame,
    /// Set the held movement intent vector (normalized by the input layer).
    SetMoveIntent { x: f32, y: f32 },
    /// Set the point the player unit should face (e.g. cursor position).
    SetAimPoint { x: f32, y: f32 },
    /// Hold or release the fire trigger.
    SetTrigger { held: bool },
    /// Request a reload.
    Reload,
    /// Return to the title screen from the result screen.
    ReturnToTitle,
}
