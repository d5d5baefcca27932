use core::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A materialized mine placement together with the adjacency count of every cell.
///
/// Both arrays are computed once on construction and never change afterwards. Only the mine
/// mask is serialized; the counts are rebuilt from it when deserializing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMineLayout", into = "RawMineLayout")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    adjacent_counts: Array2<u8>,
    mine_count: CellCount,
}

#[derive(Serialize, Deserialize)]
struct RawMineLayout {
    mine_mask: Array2<bool>,
}

impl TryFrom<RawMineLayout> for MineLayout {
    type Error = GameError;

    fn try_from(raw: RawMineLayout) -> Result<Self> {
        let (rows, cols) = raw.mine_mask.dim();
        let max = usize::from(Coord::MAX);
        if rows == 0 || cols == 0 || rows > max || cols > max {
            return Err(GameError::LayoutMismatch);
        }
        Ok(Self::from_mine_mask(raw.mine_mask))
    }
}

impl From<MineLayout> for RawMineLayout {
    fn from(layout: MineLayout) -> Self {
        Self {
            mine_mask: layout.mine_mask,
        }
    }
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        let adjacent_counts = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            mine_mask
                .iter_neighbors((row as Coord, col as Coord))
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count() as u8
        });
        Self {
            mine_mask,
            adjacent_counts,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds(coords));
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.mine_mask)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Number of mines in the Moore-neighborhood of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.adjacent_counts[coords.to_nd_index()]
    }

    /// Every mine position, in row-major order.
    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
