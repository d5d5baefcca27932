use serde::{Deserialize, Serialize};

use crate::GamePhase;

/// Emitted every time the engine moves from one phase to another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChange {
    pub from: GamePhase,
    pub to: GamePhase,
}

impl PhaseChange {
    pub const fn started(self) -> bool {
        matches!(self.to, GamePhase::Active)
    }

    pub const fn finished(self) -> bool {
        self.to.is_finished()
    }
}
