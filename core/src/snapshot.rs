use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to redraw the board after a command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub phase: GamePhase,
    pub remaining_mines: isize,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<CellView>,
}

impl BoardSnapshot {
    pub fn from_engine<G: MineGenerator>(engine: &BoardEngine<G>) -> Self {
        let size = engine.config().size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            engine.view_unchecked((row as Coord, col as Coord))
        });

        Self {
            phase: engine.phase(),
            remaining_mines: engine.remaining_mines(),
            triggered_mine: engine.triggered_mine(),
            cells,
        }
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.cells)
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}
