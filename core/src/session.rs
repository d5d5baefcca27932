use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Engine commands as produced by an input adapter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Reveal(Coord2),
    ChordReveal(Coord2),
    ToggleFlag(Coord2),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Reveal(RevealOutcome),
    Flag(FlagOutcome),
}

impl CommandOutcome {
    /// Whether the renderer should redraw after this command
    pub const fn has_update(&self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Flag(outcome) => outcome.has_update(),
        }
    }
}

/// One player's game: the current engine plus the clock watching it.
#[derive(Clone, Debug)]
pub struct GameSession<G = RandomMineGenerator> {
    engine: BoardEngine<G>,
    clock: PlayClock,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(BoardEngine::new(config))
    }

    /// Throws the current game away and starts a fresh one.
    pub fn new_game(&mut self, config: GameConfig) {
        *self = Self::new(config);
    }
}

impl<G: MineGenerator> GameSession<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Self {
        Self::with_engine(BoardEngine::with_generator(config, generator))
    }

    pub fn with_engine(engine: BoardEngine<G>) -> Self {
        Self {
            engine,
            clock: PlayClock::new(),
        }
    }

    /// Like [`GameSession::new_game`], with a caller-supplied mine generator.
    pub fn restart_with(&mut self, config: GameConfig, generator: G) {
        *self = Self::with_generator(config, generator);
    }

    pub fn engine(&self) -> &BoardEngine<G> {
        &self.engine
    }

    pub fn clock(&self) -> &PlayClock {
        &self.clock
    }

    pub fn elapsed_secs(&self, now: Instant) -> u64 {
        self.clock.elapsed_secs(now)
    }

    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome> {
        self.execute_at(command, Instant::now())
    }

    /// Runs `command` and forwards any phase changes it caused to the clock at `now`.
    pub fn execute_at(&mut self, command: Command, now: Instant) -> Result<CommandOutcome> {
        let outcome = match command {
            Command::Reveal(coords) => self.engine.reveal(coords).map(CommandOutcome::Reveal),
            Command::ChordReveal(coords) => {
                self.engine.chord_reveal(coords).map(CommandOutcome::Reveal)
            }
            Command::ToggleFlag(coords) => {
                self.engine.toggle_flag(coords).map(CommandOutcome::Flag)
            }
        };

        for change in self.engine.drain_events() {
            self.clock.observe(change, now);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::*;

    fn session(size: Coord2, mines: &[Coord2]) -> GameSession<FixedMineGenerator> {
        let config = GameConfig::new(size.0, size.1, mines.len() as CellCount).unwrap();
        GameSession::with_generator(config, FixedMineGenerator::new(mines))
    }

    #[test]
    fn clock_follows_game_lifecycle() {
        let t0 = Instant::now();
        let mut session = session((1, 3), &[(0, 2)]);

        let flagged = session
            .execute_at(Command::ToggleFlag((0, 2)), t0)
            .unwrap();
        assert_eq!(flagged, CommandOutcome::Flag(FlagOutcome::Flagged));
        assert!(!session.clock().is_running());

        let revealed = session.execute_at(Command::Reveal((0, 1)), t0).unwrap();
        assert!(revealed.has_update());
        assert!(session.clock().is_running());
        assert_eq!(session.elapsed_secs(t0 + Duration::from_secs(3)), 3);

        let won = session
            .execute_at(Command::Reveal((0, 0)), t0 + Duration::from_secs(5))
            .unwrap();
        assert_eq!(won, CommandOutcome::Reveal(RevealOutcome::Won));
        assert_eq!(session.elapsed_secs(t0 + Duration::from_secs(30)), 5);
    }

    #[test]
    fn errors_pass_through() {
        let mut session = session((2, 2), &[(1, 1)]);

        assert_eq!(
            session.execute(Command::ChordReveal((2, 2))),
            Err(GameError::OutOfBounds((2, 2)))
        );

        session.execute(Command::Reveal((0, 0))).unwrap();
        assert_eq!(
            session.execute(Command::Reveal((1, 1))).unwrap(),
            CommandOutcome::Reveal(RevealOutcome::Lost)
        );
        assert!(!session.clock().is_running());
        assert_eq!(
            session.execute(Command::ToggleFlag((0, 1))),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn new_game_discards_previous_board() {
        let mut session = GameSession::new(Preset::Small.config());
        session.execute(Command::Reveal((0, 0))).unwrap();
        assert_ne!(session.engine().phase(), GamePhase::Pending);

        session.new_game(Preset::Large.config());

        assert_eq!(session.engine().phase(), GamePhase::Pending);
        assert_eq!(session.engine().config(), Preset::Large.config());
        assert_eq!(session.engine().remaining_mines(), 20);
        assert!(!session.clock().is_running());
    }

    #[test]
    fn restart_with_scripted_layout() {
        let mut session = session((1, 2), &[(0, 1)]);
        session.execute(Command::ToggleFlag((0, 0))).unwrap();

        let config = GameConfig::new(1, 2, 1).unwrap();
        session.restart_with(config, FixedMineGenerator::new([(0, 0)]));

        assert_eq!(session.engine().flagged_count(), 0);
        assert_eq!(
            session.execute(Command::Reveal((0, 1))).unwrap(),
            CommandOutcome::Reveal(RevealOutcome::Won)
        );
    }
}
