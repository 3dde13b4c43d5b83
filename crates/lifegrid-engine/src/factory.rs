//! Assembles a [`Grid`] from a topology flag, a rule name and parameters.

use lifegrid_core::pattern;
use lifegrid_space::topology_for;
use tracing::debug;

use crate::config::{
    check_cell_count, check_dimension, AutomatonConfig, ConfigError, InitialCondition, RuleKind,
};
use crate::grid::Grid;

/// Builds grids bound to a topology/rule pair.
///
/// The factory itself only carries the seed handed to every grid it builds.
///
/// # Example
///
/// ```
/// use lifegrid_engine::AutomatonFactory;
///
/// let grid = AutomatonFactory::with_seed(7)
///     .build(20, 10, true, "probabilistic", 0.8)
///     .unwrap();
/// assert_eq!(grid.topology().name(), "toroidal");
/// assert_eq!(grid.rule().name(), "probabilistic");
/// assert_eq!(grid.seed(), 7);
///
/// assert!(AutomatonFactory::new().build(0, 10, false, "conway", 0.9).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutomatonFactory {
    seed: u64,
}

impl AutomatonFactory {
    /// A factory seeding every grid with 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory seeding every grid with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed passed to built grids.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Build an all-dead grid.
    ///
    /// `rule` is one of `conway`, `probabilistic` or `graduated`
    /// (case-insensitive). `certainty` is validated for every rule and
    /// used only by `probabilistic`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidDimension`] if `width` or `height` is `<= 0`
    /// - [`ConfigError::DimensionTooLarge`] if either exceeds `i32::MAX`
    /// - [`ConfigError::CellCountOverflow`] if `width * height` exceeds
    ///   [`MAX_CELLS`](crate::config::MAX_CELLS)
    /// - [`ConfigError::UnknownRule`] for an unrecognized rule name
    /// - [`ConfigError::InvalidCertainty`] if `certainty` is NaN or outside `[0, 1]`
    pub fn build(
        &self,
        width: i64,
        height: i64,
        toroidal: bool,
        rule: &str,
        certainty: f64,
    ) -> Result<Grid, ConfigError> {
        let width = check_dimension("width", width)?;
        let height = check_dimension("height", height)?;
        check_cell_count(width, height)?;
        let kind: RuleKind = rule.parse()?;
        Self::assemble(width, height, toroidal, kind, certainty, self.seed)
    }

    /// Build a grid from a full configuration and apply its initial
    /// condition.
    ///
    /// The configuration's own seed is used, not the factory's. Patterns
    /// are placed at `(width / 4, height / 4)`.
    ///
    /// # Errors
    ///
    /// Anything [`AutomatonConfig::validate`] reports.
    pub fn from_config(config: &AutomatonConfig) -> Result<Grid, ConfigError> {
        let (width, height) = config.validate()?;
        let mut grid = Self::assemble(
            width,
            height,
            config.toroidal,
            config.rule,
            config.certainty,
            config.seed,
        )?;

        match &config.initial {
            InitialCondition::Empty => {}
            InitialCondition::Random => grid.randomize(config.density),
            InitialCondition::Pattern(name) => {
                let p = pattern(name)?;
                let offset = ((width / 4) as i32, (height / 4) as i32);
                grid.set_pattern(p, offset);
                debug!(pattern = p.name(), x = offset.0, y = offset.1, "pattern placed");
            }
        }
        Ok(grid)
    }

    fn assemble(
        width: u32,
        height: u32,
        toroidal: bool,
        kind: RuleKind,
        certainty: f64,
        seed: u64,
    ) -> Result<Grid, ConfigError> {
        let rule = kind.build(certainty)?;
        let topology = topology_for(toroidal);
        debug!(
            width,
            height,
            topology = topology.name(),
            rule = rule.name(),
            seed,
            "building grid"
        );
        Grid::new(width, height, topology, rule, seed)
    }
}
