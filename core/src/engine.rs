use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Valid transitions:
/// - Pending -> Active
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board allocated, mines not placed yet
    #[default]
    Pending,
    /// Mines placed, play continues
    Active,
    /// Every safe cell revealed
    Won,
    /// A mine was revealed
    Lost,
}

impl GamePhase {
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of a reveal or chord-reveal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Unchanged,
    /// Newly revealed cells, in the order they were opened
    Revealed(Vec<Coord2>),
    Lost,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    /// The cell is already revealed
    Rejected,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Owns one game from the first click to win or loss.
///
/// Mines are placed by `G` on the first reveal, so that cell is never a mine.
#[derive(Clone, Debug)]
pub struct BoardEngine<G = RandomMineGenerator> {
    config: GameConfig,
    generator: G,
    mine_layout: Option<MineLayout>,
    board: Array2<CellState>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    phase: GamePhase,
    triggered_mine: Option<Coord2>,
    events: SmallVec<[PhaseChange; 2]>,
}

impl BoardEngine {
    /// Validates the configuration and starts a game with randomly placed mines.
    pub fn create(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        Ok(Self::new(GameConfig::new(rows, cols, mines)?))
    }

    pub fn new(config: GameConfig) -> Self {
        Self::with_generator(config, RandomMineGenerator::from_os_rng())
    }

    pub fn from_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomMineGenerator::from_seed(seed))
    }
}

impl<G: MineGenerator> BoardEngine<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Self {
        log::debug!("New game {:?}", config);
        Self {
            config,
            generator,
            mine_layout: None,
            board: Array2::default(config.size().to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            phase: GamePhase::Pending,
            triggered_mine: None,
            events: SmallVec::new(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn remaining_mines(&self) -> isize {
        (self.config.mines() as isize) - (self.flagged_count as isize)
    }

    /// The mine that ended the game, only set after a loss
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Every mine position in row-major order, available once the game is over
    pub fn mine_coords(&self) -> Option<Vec<Coord2>> {
        if !self.phase.is_finished() {
            return None;
        }
        self.mine_layout.as_ref().map(MineLayout::mine_coords)
    }

    pub fn cell_state(&self, coords: Coord2) -> Result<CellState> {
        let coords = self.config.validate_coords(coords)?;
        Ok(self.board[coords.to_nd_index()])
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.config.validate_coords(coords)?;
        Ok(self.view_unchecked(coords))
    }

    pub(crate) fn view_unchecked(&self, coords: Coord2) -> CellView {
        let state = self.board[coords.to_nd_index()];
        let Some(layout) = self.mine_layout.as_ref() else {
            return CellView {
                state,
                ..CellView::HIDDEN
            };
        };

        let revealed = state == CellState::Revealed;
        let has_mine = layout.contains_mine(coords);
        CellView {
            state,
            is_mine: (revealed || self.phase.is_finished()).then_some(has_mine),
            adjacent_mines: (revealed && !has_mine).then(|| layout.adjacent_mine_count(coords)),
        }
    }

    /// Whether a chord-reveal at `coords` would open its neighbors
    pub fn is_chordable(&self, coords: Coord2) -> bool {
        if !matches!(self.phase, GamePhase::Active) {
            return false;
        }
        let Ok(coords) = self.config.validate_coords(coords) else {
            return false;
        };
        let Some(layout) = self.mine_layout.as_ref() else {
            return false;
        };
        if self.board[coords.to_nd_index()] != CellState::Revealed || layout.contains_mine(coords)
        {
            return false;
        }

        let count = layout.adjacent_mine_count(coords);
        count > 0 && count == self.count_flagged_neighbors(coords)
    }

    /// Hands pending phase changes to the caller and clears the queue.
    pub fn drain_events(&mut self) -> impl Iterator<Item = PhaseChange> + '_ {
        self.events.drain(..)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use CellState::*;

        let coords = self.config.validate_coords(coords)?;
        self.check_not_finished()?;

        let outcome = match self.board[coords.to_nd_index()] {
            Hidden => {
                self.board[coords.to_nd_index()] = Flagged;
                self.flagged_count += 1;
                FlagOutcome::Flagged
            }
            Flagged => {
                self.board[coords.to_nd_index()] = Hidden;
                self.flagged_count -= 1;
                FlagOutcome::Unflagged
            }
            Revealed => FlagOutcome::Rejected,
        };
        log::debug!("Toggle flag at {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.config.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.phase.is_pending() {
            self.place_mines(coords)?;
        }

        let outcome = self.reveal_single_cell(coords);
        log::debug!("Reveal at {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    /// Reveals every unflagged hidden neighbor once the flags around a numbered cell match its
    /// count. The first mine hit ends the game and leaves the remaining neighbors untouched.
    pub fn chord_reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.config.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.is_chordable(coords) {
            return Ok(RevealOutcome::Unchanged);
        }

        let mut opened = Vec::new();
        for neighbor in self.board.iter_neighbors(coords) {
            match self.reveal_single_cell(neighbor) {
                RevealOutcome::Unchanged => {}
                RevealOutcome::Revealed(cells) => opened.extend(cells),
                finished @ (RevealOutcome::Lost | RevealOutcome::Won) => {
                    log::debug!("Chord at {:?}: {:?}", coords, finished);
                    return Ok(finished);
                }
            }
        }

        log::debug!("Chord at {:?} opened {} cells", coords, opened.len());
        Ok(if opened.is_empty() {
            RevealOutcome::Unchanged
        } else {
            RevealOutcome::Revealed(opened)
        })
    }

    fn place_mines(&mut self, avoid: Coord2) -> Result<()> {
        let layout = self.generator.generate(self.config, avoid)?;

        if layout.size() != self.config.size()
            || layout.mine_count() != self.config.mines()
            || layout.contains_mine(avoid)
        {
            log::warn!(
                "Generator returned {} mines on {:?} for {:?} avoiding {:?}",
                layout.mine_count(),
                layout.size(),
                self.config,
                avoid
            );
            return Err(GameError::LayoutMismatch);
        }

        self.mine_layout = Some(layout);
        self.set_phase(GamePhase::Active);
        Ok(())
    }

    fn reveal_single_cell(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(layout) = self.mine_layout.as_ref() else {
            return RevealOutcome::Unchanged;
        };
        if self.board[coords.to_nd_index()] != CellState::Hidden {
            return RevealOutcome::Unchanged;
        }

        if layout.contains_mine(coords) {
            self.board[coords.to_nd_index()] = CellState::Revealed;
            self.triggered_mine = Some(coords);
            self.set_phase(GamePhase::Lost);
            return RevealOutcome::Lost;
        }

        let opened = flood_reveal(layout, &mut self.board, coords);
        let safe_cells = layout.safe_cell_count();
        self.revealed_count += opened.len() as CellCount;

        if self.revealed_count == safe_cells {
            self.set_phase(GamePhase::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed(opened)
        }
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::debug!("Phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.events.push(PhaseChange { from, to });
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        self.board
            .iter_neighbors(coords)
            .filter(|&pos| self.board[pos.to_nd_index()] == CellState::Flagged)
            .count() as u8
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.phase.is_finished() {
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Opens `start` and expands through zero-count cells with an explicit work queue.
///
/// Only hidden cells are opened, so revealed cells are never revisited and flags stop the
/// expansion. Mines are never reached since every expanding cell has zero mine neighbors.
fn flood_reveal(
    layout: &MineLayout,
    board: &mut Array2<CellState>,
    start: Coord2,
) -> Vec<Coord2> {
    let mut opened = Vec::new();
    let mut to_visit = VecDeque::from([start]);

    while let Some(visit_coords) = to_visit.pop_front() {
        if board[visit_coords.to_nd_index()] != CellState::Hidden {
            continue;
        }

        board[visit_coords.to_nd_index()] = CellState::Revealed;
        opened.push(visit_coords);

        let count = layout.adjacent_mine_count(visit_coords);
        log::trace!("Opened {:?}, mine count: {}", visit_coords, count);

        if count == 0 {
            to_visit.extend(
                layout
                    .iter_neighbors(visit_coords)
                    .filter(|&pos| board[pos.to_nd_index()] == CellState::Hidden),
            );
        }
    }

    opened
}
