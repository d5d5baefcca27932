use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Uniformly random placement that never puts a mine under the first revealed cell.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator<R = SmallRng> {
    rng: R,
}

impl<R: rand::Rng> RandomMineGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMineGenerator<SmallRng> {
    /// Reproducible placement, the same seed always yields the same layout.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl Default for RandomMineGenerator<SmallRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: rand::Rng> MineGenerator for RandomMineGenerator<R> {
    fn generate(&mut self, config: GameConfig, avoid: Coord2) -> Result<MineLayout> {
        let avoid = config.validate_coords(avoid)?;
        let (_, cols) = config.size();
        let cols = usize::from(cols);
        let avoid_index = usize::from(avoid.0) * cols + usize::from(avoid.1);

        // sample among every cell except the avoided one, then shift indices past it
        let free_cells = usize::from(config.total_cells()) - 1;
        let picked = index::sample(&mut self.rng, free_cells, usize::from(config.mines()));

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        for i in picked.iter() {
            let i = if i >= avoid_index { i + 1 } else { i };
            mine_mask[[i / cols, i % cols]] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        log::debug!(
            "Placed {} mines on {}x{} board avoiding {:?}",
            layout.mine_count(),
            config.rows(),
            config.cols(),
            avoid
        );
        Ok(layout)
    }
}
