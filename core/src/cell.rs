use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell; a flag is a marker on a hidden cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

/// What a renderer may know about a cell.
///
/// `is_mine` is only present for revealed cells or once the game is over, `adjacent_mines`
/// only for revealed cells without a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub state: CellState,
    pub is_mine: Option<bool>,
    pub adjacent_mines: Option<u8>,
}

impl CellView {
    pub const HIDDEN: Self = Self {
        state: CellState::Hidden,
        is_mine: None,
        adjacent_mines: None,
    };
}
