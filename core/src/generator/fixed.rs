use super::*;

/// Hands out a predetermined layout, for replays and scripted boards.
///
/// Placement fails with [`GameError::LayoutMismatch`] when the layout does not match the
/// game configuration or has a mine under the first revealed cell.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, config: GameConfig, avoid: Coord2) -> Result<MineLayout> {
        let avoid = config.validate_coords(avoid)?;
        let layout = MineLayout::from_mine_coords(config.size(), &self.mines)
            .map_err(|_| GameError::LayoutMismatch)?;

        if layout.mine_count() != config.mines() || layout.contains_mine(avoid) {
            log::warn!(
                "Fixed layout with {} mines rejected for {:?} avoiding {:?}",
                layout.mine_count(),
                config,
                avoid
            );
            return Err(GameError::LayoutMismatch);
        }

        Ok(layout)
    }
}
