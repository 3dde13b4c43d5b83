//! The automaton grid: cell state, generation counter and stepping.
//!
//! [`Grid`] composes one [`Topology`] and one [`Rule`] over a fixed-size
//! [`CellMatrix`]. Each [`step()`](Grid::step) computes the whole next
//! generation into a scratch buffer while reading only the current one,
//! then swaps the two buffers and bumps the generation.
//!
//! # Ownership model
//!
//! `Grid` is [`Send`] but every mutating method takes `&mut self`, and
//! [`cells()`](Grid::cells) hands out a borrow of `self`. A caller holding
//! the matrix cannot step, so a half-computed generation is never visible.

use std::fmt;

use lifegrid_core::{CellMatrix, CellState, Coord, Pattern};
use lifegrid_rule::Rule;
use lifegrid_space::Topology;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::config::{check_cell_count, check_dimension, ConfigError};

// Compile-time assertion: Grid is Send.
// Fails to compile if any field is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Grid>();
    }
};

/// A two-dimensional cellular automaton.
///
/// Created directly with [`Grid::new`] or, more commonly, through
/// [`AutomatonFactory`](crate::AutomatonFactory).
///
/// # Example
///
/// ```
/// use lifegrid_core::{pattern, CellState};
/// use lifegrid_engine::Grid;
/// use lifegrid_rule::Conway;
/// use lifegrid_space::Bounded;
///
/// let mut grid = Grid::new(5, 5, Box::new(Bounded), Box::new(Conway), 0).unwrap();
/// grid.set_pattern(pattern("blinker").unwrap(), (1, 1));
/// grid.step();
/// assert_eq!(grid.generation(), 1);
/// assert_eq!(grid.get(2, 1), Some(CellState::Alive)); // now vertical
/// ```
pub struct Grid {
    width: u32,
    height: u32,
    /// Current generation. Only ever handed out by shared reference.
    current: CellMatrix,
    /// Next generation under construction; contents are stale between steps.
    scratch: CellMatrix,
    generation: u64,
    topology: Box<dyn Topology>,
    rule: Box<dyn Rule>,
    /// Stream shared by stochastic rules and `randomize()`.
    rng: ChaCha8Rng,
    seed: u64,
}

impl Grid {
    /// Create an all-dead grid at generation 0.
    ///
    /// `seed` initialises the grid's random stream, used by stochastic
    /// rules and [`randomize()`](Grid::randomize).
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidDimension`] if either dimension is 0,
    /// [`ConfigError::DimensionTooLarge`] if either exceeds `i32::MAX`,
    /// [`ConfigError::CellCountOverflow`] if `width * height` exceeds
    /// [`MAX_CELLS`](crate::config::MAX_CELLS).
    pub fn new(
        width: u32,
        height: u32,
        topology: Box<dyn Topology>,
        rule: Box<dyn Rule>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let width = check_dimension("width", width as i64)?;
        let height = check_dimension("height", height as i64)?;
        check_cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            current: CellMatrix::new(width, height),
            scratch: CellMatrix::new(width, height),
            generation: 0,
            topology,
            rule,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Completed steps since construction or the last [`clear()`](Grid::clear).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation's cells.
    pub fn cells(&self) -> &CellMatrix {
        &self.current
    }

    /// State of `(x, y)`, or `None` out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<CellState> {
        self.current.get(x, y)
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// The neighbourhood strategy.
    pub fn topology(&self) -> &dyn Topology {
        self.topology.as_ref()
    }

    /// The transition rule.
    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Seed of the current random stream.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Living neighbours of `(x, y)` under the grid's topology, or `None`
    /// if `(x, y)` is out of bounds.
    pub fn neighbour_count(&self, x: i32, y: i32) -> Option<u8> {
        self.current.index_of(x, y)?;
        let neighbours = self.topology.neighbours(x, y, self.width, self.height);
        Some(living_count(&self.current, &neighbours))
    }

    /// Advance one synchronous generation.
    ///
    /// Every cell is evaluated in row-major order against the current
    /// matrix; results go to the scratch buffer, which becomes current
    /// only after the last cell is written.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        let Self {
            current,
            scratch,
            topology,
            rule,
            rng,
            ..
        } = self;

        let next = scratch.as_mut_slice();
        let mut idx = 0;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let neighbours = topology.neighbours(x, y, width, height);
                let living = living_count(current, &neighbours);
                next[idx] = rule.next_state(current.as_slice()[idx], living, &mut *rng);
                idx += 1;
            }
        }

        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.current.population(),
            "step"
        );
    }

    /// Advance `n` generations.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Overwrite one cell. Out-of-bounds coordinates are ignored.
    ///
    /// Does not touch the generation counter.
    pub fn set_cell(&mut self, x: i32, y: i32, state: CellState) {
        self.current.set(x, y, state);
    }

    /// Switch on every cell of `pattern`, shifted by `offset`.
    ///
    /// Cells that land outside the grid are clipped individually.
    pub fn set_pattern(&mut self, pattern: &Pattern, offset: Coord) {
        let (ox, oy) = offset;
        for &(px, py) in pattern.cells() {
            if let (Some(x), Some(y)) = (px.checked_add(ox), py.checked_add(oy)) {
                self.set_cell(x, y, CellState::Alive);
            }
        }
    }

    /// Replace every cell: alive iff a fresh draw in `[0, 1)` is below
    /// `density`.
    ///
    /// `density <= 0` (or NaN) leaves every cell dead; `density >= 1`
    /// makes every cell alive. Does not touch the generation counter.
    pub fn randomize(&mut self, density: f64) {
        for cell in self.current.as_mut_slice() {
            *cell = CellState::from(self.rng.random::<f64>() < density);
        }
    }

    /// Kill every cell and reset the generation counter to 0.
    pub fn clear(&mut self) {
        self.current.fill(CellState::Dead);
        self.generation = 0;
        debug!("grid cleared");
    }

    /// Restart the random stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
        debug!(seed, "grid reseeded");
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("generation", &self.generation)
            .field("topology", &self.topology.name())
            .field("rule", &self.rule.name())
            .field("seed", &self.seed)
            .finish()
    }
}

fn living_count(cells: &CellMatrix, neighbours: &[Coord]) -> u8 {
    neighbours
        .iter()
        .filter(|&&(x, y)| cells.get(x, y).is_some_and(CellState::is_alive))
        .count() as u8
}
