//! Per-session counters: score, kills, timing, and the spawn schedule.

use serde::{Deserialize, Serialize};

use skirmish_core::constants::{FIRST_WAVE_DELAY_SECS, KILL_SCORE_FACTOR, SURVIVAL_BONUS_PER_SEC};
use skirmish_core::state::SessionView;

/// Session-wide state. Reset when a new game starts; mutated only by the
/// collision resolver (kill credit), the spawner (rescheduling), and the
/// end-of-session transition (survival bonus). Score never decreases
/// within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub score: u32,
    pub kills: u32,
    /// Sim time the session started.
    pub started_at: f64,
    /// Sim time the player unit was destroyed; `None` while active.
    pub ended_at: Option<f64>,
    /// Sim time the next adversary wave is due.
    pub next_wave_at: f64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::starting_at(0.0)
    }
}

impl SessionState {
    /// Fresh session beginning at `now`, first wave after the fixed delay.
    pub fn starting_at(now: f64) -> Self {
        Self {
            score: 0,
            kills: 0,
            started_at: now,
            ended_at: None,
            next_wave_at: now + FIRST_WAVE_DELAY_SECS,
        }
    }

    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Credit a kill: one to the counter, score proportional to the
    /// victim's difficulty scale.
    pub fn record_kill(&mut self, scale: f32) {
        self.kills += 1;
        self.score += (scale * KILL_SCORE_FACTOR) as u32;
    }

    /// End the session at `now`, adding the survival-time bonus.
    /// Idempotent: a second call changes nothing.
    pub fn end(&mut self, now: f64) {
        if self.ended_at.is_some() {
            return;
        }
        self.ended_at = Some(now);
        self.score += SURVIVAL_BONUS_PER_SEC * self.survival_secs(now) as u32;
    }

    /// Whole seconds survived so far (or until session end).
    pub fn survival_secs(&self, now: f64) -> u64 {
        let end = self.ended_at.unwrap_or(now);
        (end - self.started_at).max(0.0) as u64
    }

    /// Derived HUD/result view.
    pub fn view(&self, now: f64) -> SessionView {
        SessionView {
            score: self.score,
            kills: self.kills,
            elapsed_secs: self.ended_at.unwrap_or(now) - self.started_at,
            active: self.is_active(),
        }
    }
}
