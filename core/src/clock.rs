use web_time::Instant;

use crate::PhaseChange;

/// Elapsed-time display source, started and stopped by phase changes.
///
/// Reads nothing from the board; feed it the engine's events and ask for seconds whenever the
/// display refreshes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PlayClock {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl PlayClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, change: PhaseChange, now: Instant) {
        if change.started() && self.started_at.is_none() {
            log::debug!("clock started");
            self.started_at = Some(now);
        }
        if change.finished() && self.stopped_at.is_none() {
            log::debug!("clock stopped");
            // a game can start and finish within the same command
            self.started_at.get_or_insert(now);
            self.stopped_at = Some(now);
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    /// How many whole seconds have passed since the game started, 0 if it hasn't started
    pub fn elapsed_secs(&self, now: Instant) -> u64 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        self.stopped_at
            .unwrap_or(now)
            .saturating_duration_since(started_at)
            .as_secs()
    }
}
