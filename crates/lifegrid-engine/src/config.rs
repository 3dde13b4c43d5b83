//! Automaton configuration, validation, and error types.
//!
//! [`AutomatonConfig`] is the plain-value input for building a grid. It
//! mirrors a command-line flag set (dimensions, topology flag, rule name and
//! parameters, initial pattern or random fill) without parsing anything
//! itself. [`validate()`](AutomatonConfig::validate) checks every field once,
//! at construction time.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use lifegrid_core::{pattern, PatternError};
use lifegrid_rule::{Conway, Graduated, Probabilistic, Rule, RuleError};

/// Largest accepted grid dimension. Coordinates are `i32`.
pub const MAX_DIM: u32 = i32::MAX as u32;

/// Largest accepted `width * height`. The grid keeps two matrices of this
/// many one-byte cells.
pub const MAX_CELLS: u64 = u32::MAX as u64;

// ── ConfigError ────────────────────────────────────────────────────

/// Invalid automaton configuration.
///
/// Raised by the factory and by [`Grid::new`](crate::Grid::new) at
/// construction time; never recovered silently.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A dimension is zero or negative.
    InvalidDimension {
        /// `"width"` or `"height"`.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A dimension exceeds [`MAX_DIM`].
    DimensionTooLarge {
        /// `"width"` or `"height"`.
        name: &'static str,
        /// The rejected value.
        value: i64,
        /// The largest accepted value.
        max: u32,
    },
    /// `width * height` exceeds [`MAX_CELLS`].
    CellCountOverflow {
        /// The requested cell count, saturated at `u64::MAX`.
        value: u64,
    },
    /// The rule name is not one of `conway`, `probabilistic`, `graduated`.
    UnknownRule {
        /// The unrecognized name.
        name: String,
    },
    /// Certainty is NaN or outside `[0, 1]`.
    InvalidCertainty {
        /// The rejected value.
        value: f64,
    },
    /// Random-fill density is NaN or outside `[0, 1]`.
    InvalidDensity {
        /// The rejected value.
        value: f64,
    },
    /// Rule parameter validation failed.
    ///
    /// [`RuleKind::build`] reports [`ConfigError::InvalidCertainty`]
    /// instead; this variant carries errors from rules constructed
    /// directly, such as [`Graduated::with_table`], through `?`.
    Rule(RuleError),
    /// The initial pattern is not in the catalog.
    Pattern(PatternError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::CellCountOverflow { value } => {
                write!(f, "cell count {value} exceeds maximum of {MAX_CELLS}")
            }
            Self::UnknownRule { name } => write!(
                f,
                "unknown rule '{name}' (expected one of: conway, probabilistic, graduated)"
            ),
            Self::InvalidCertainty { value } => {
                write!(f, "certainty must be in [0, 1], got {value}")
            }
            Self::InvalidDensity { value } => {
                write!(f, "density must be in [0, 1], got {value}")
            }
            Self::Rule(e) => write!(f, "rule: {e}"),
            Self::Pattern(e) => write!(f, "initial condition: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rule(e) => Some(e),
            Self::Pattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

impl From<PatternError> for ConfigError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

/// Check a user-supplied dimension and narrow it to `u32`.
pub(crate) fn check_dimension(name: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::InvalidDimension { name, value });
    }
    if value > MAX_DIM as i64 {
        return Err(ConfigError::DimensionTooLarge {
            name,
            value,
            max: MAX_DIM,
        });
    }
    Ok(value as u32)
}

/// Check that a `width × height` grid fits in [`MAX_CELLS`].
pub(crate) fn check_cell_count(width: u32, height: u32) -> Result<(), ConfigError> {
    let value = (width as u64).saturating_mul(height as u64);
    if value > MAX_CELLS {
        return Err(ConfigError::CellCountOverflow { value });
    }
    Ok(())
}

pub(crate) fn check_certainty(value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidCertainty { value })
    }
}

fn check_density(value: f64) -> Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidDensity { value })
    }
}

// ── RuleKind ───────────────────────────────────────────────────────

/// The three supported rule families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Deterministic B3/S23.
    #[default]
    Conway,
    /// Conway's outcome applied with a fixed certainty.
    Probabilistic,
    /// Count-dependent survival and birth probabilities.
    Graduated,
}

impl RuleKind {
    /// Every rule kind, in documentation order.
    pub const ALL: [RuleKind; 3] = [Self::Conway, Self::Probabilistic, Self::Graduated];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conway => "conway",
            Self::Probabilistic => "probabilistic",
            Self::Graduated => "graduated",
        }
    }

    /// Instantiate the rule. `certainty` is consumed by
    /// [`Probabilistic`] only, but is validated for every kind.
    pub fn build(self, certainty: f64) -> Result<Box<dyn Rule>, ConfigError> {
        let certainty = check_certainty(certainty)?;
        Ok(match self {
            Self::Conway => Box::new(Conway),
            Self::Probabilistic => Box::new(Probabilistic::new(certainty)?),
            Self::Graduated => Box::new(Graduated::new()),
        })
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownRule {
                name: s.to_string(),
            })
    }
}

// ── InitialCondition ───────────────────────────────────────────────

/// How the grid is seeded after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InitialCondition {
    /// Leave every cell dead.
    Empty,
    /// Fill at random with [`AutomatonConfig::density`].
    #[default]
    Random,
    /// Place a catalog pattern at a quarter of the way in on each axis.
    Pattern(String),
}

impl FromStr for InitialCondition {
    type Err = ConfigError;

    /// `"random"` and `"empty"` (any case) select those modes; anything else
    /// must be a catalog pattern name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("random") {
            Ok(Self::Random)
        } else if s.eq_ignore_ascii_case("empty") {
            Ok(Self::Empty)
        } else {
            Ok(Self::Pattern(pattern(s)?.name().to_string()))
        }
    }
}

// ── AutomatonConfig ────────────────────────────────────────────────

/// Complete construction-time configuration of an automaton.
///
/// Dimensions are signed so that user input such as `-1` is reported as
/// [`ConfigError::InvalidDimension`] rather than failing to parse.
#[derive(Clone, Debug, PartialEq)]
pub struct AutomatonConfig {
    /// Grid width. Default: 50.
    pub width: i64,
    /// Grid height. Default: 50.
    pub height: i64,
    /// Wrap-around edges. Default: false.
    pub toroidal: bool,
    /// Transition rule. Default: Conway.
    pub rule: RuleKind,
    /// Certainty for the probabilistic rule. Default: 0.9.
    pub certainty: f64,
    /// Initial condition. Default: random fill.
    pub initial: InitialCondition,
    /// Alive probability per cell for random fill. Default: 0.3.
    pub density: f64,
    /// Seed for the grid's random stream. Default: 0.
    pub seed: u64,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            toroidal: false,
            rule: RuleKind::Conway,
            certainty: Probabilistic::DEFAULT_CERTAINTY,
            initial: InitialCondition::Random,
            density: 0.3,
            seed: 0,
        }
    }
}

impl AutomatonConfig {
    /// Check every field; returns the validated `(width, height)`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidDimension`] / [`ConfigError::DimensionTooLarge`]
    /// - [`ConfigError::CellCountOverflow`]
    /// - [`ConfigError::InvalidCertainty`]
    /// - [`ConfigError::InvalidDensity`]
    /// - [`ConfigError::Pattern`] if the initial pattern is unknown
    pub fn validate(&self) -> Result<(u32, u32), ConfigError> {
        let width = check_dimension("width", self.width)?;
        let height = check_dimension("height", self.height)?;
        check_cell_count(width, height)?;
        check_certainty(self.certainty)?;
        check_density(self.density)?;
        if let InitialCondition::Pattern(name) = &self.initial {
            pattern(name)?;
        }
        Ok((width, height))
    }
}
