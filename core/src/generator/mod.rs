use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Materializes the mine layout once the first revealed cell is known.
///
/// The returned layout must hold exactly `config.mines()` mines, none of them at `avoid`.
pub trait MineGenerator {
    fn generate(&mut self, config: GameConfig, avoid: Coord2) -> Result<MineLayout>;
}
