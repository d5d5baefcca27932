use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// The three integers that fully describe a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl GameConfig {
    /// Validates that the board is non-empty and leaves at least one safe cell.
    ///
    /// Each side is capped at 255 cells by [`Coord`].
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 || mines >= mult(rows, cols) {
            return Err(GameError::InvalidConfiguration { rows, cols, mines });
        }
        Ok(Self { rows, cols, mines })
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.rows && coords.1 < self.cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords))
        }
    }
}

/// Unvalidated form, only used when deserializing.
#[derive(Deserialize)]
struct RawGameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.rows, raw.cols, raw.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}

/// Board setups offered to the player when starting a new game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    Small,
    Large,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Small, Preset::Large];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Small => GameConfig {
                rows: 10,
                cols: 10,
                mines: 10,
            },
            Self::Large => GameConfig {
                rows: 15,
                cols: 15,
                mines: 20,
            },
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "10x10 (10 mines)",
            Self::Large => "15x15 (20 mines)",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_board() {
        assert_eq!(
            GameConfig::new(0, 5, 0),
            Err(GameError::InvalidConfiguration {
                rows: 0,
                cols: 5,
                mines: 0
            })
        );
        assert!(GameConfig::new(5, 0, 0).is_err());
    }

    #[test]
    fn rejects_board_without_safe_cell() {
        assert!(GameConfig::new(1, 1, 1).is_err());
        assert!(GameConfig::new(3, 3, 9).is_err());
        assert!(GameConfig::new(3, 3, 8).is_ok());
    }

    #[test]
    fn accepts_mine_free_board() {
        let config = GameConfig::new(1, 1, 0).unwrap();
        assert_eq!(config.safe_cells(), 1);
    }

    #[test]
    fn presets_are_valid_configs() {
        for preset in Preset::ALL {
            let config = preset.config();
            assert_eq!(
                GameConfig::new(config.rows(), config.cols(), config.mines()),
                Ok(config)
            );
        }
        assert_eq!(GameConfig::from(Preset::Large).size(), (15, 15));
        assert_eq!(GameConfig::default().mines(), 10);
        assert_eq!(Preset::Large.to_string(), "15x15 (20 mines)");
    }

    #[test]
    fn deserialize_validates() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows":4,"cols":5,"mines":3}"#).unwrap();
        assert_eq!(config, GameConfig::new(4, 5, 3).unwrap());

        let too_full = serde_json::from_str::<GameConfig>(r#"{"rows":2,"cols":2,"mines":4}"#);
        assert!(too_full.is_err());
    }

    #[test]
    fn validate_coords_reports_offending_position() {
        let config = GameConfig::new(2, 3, 1).unwrap();
        assert_eq!(config.validate_coords((1, 2)), Ok((1, 2)));
        assert_eq!(
            config.validate_coords((2, 0)),
            Err(GameError::OutOfBounds((2, 0)))
        );
    }
}
