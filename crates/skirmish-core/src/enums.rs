//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; no simulation running.
    #[default]
    Title,
    /// A session is in progress.
    Active,
    /// The player unit was destroyed; session frozen for the result screen.
    GameOver,
}

/// Which side an entity fights for. Selects collision filters and targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Friend,
    Enemy,
}

/// Adversary behavior mode tag. Closed enumeration — controller behavior
/// is selected here, not by open-ended subtyping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorMode {
    /// Close to standoff distance, hold there, fire continuously.
    #[default]
    Standoff,
    /// Hold position and face the player without firing.
    Passive,
}

/// Displayable ammunition status — a derived view, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "rounds")]
pub enum AmmoStatus {
    Reloading,
    Rounds(u32),
}

impl std::fmt::Display for AmmoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmmoStatus::Reloading => write!(f, "Reloading"),
            AmmoStatus::Rounds(n) => write!(f, "{n}"),
        }
    }
}
