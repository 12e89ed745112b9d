//! Run configuration for the `life-board` runner.

use crate::board::Board;
use crate::error::ConfigError;
use crate::patterns;

const DEFAULT_GENERATIONS: u64 = 32;

/// What the first generation looks like.
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    /// A built-in pattern from [`patterns::PATTERNS`], by name.
    Pattern(String),
    /// A square random soup.
    Random { size: usize, density: f64, seed: u64 },
}

/// Configuration for a simulation run.
///
/// Use `RunConfig::default()` for a glider run, or adjust individual knobs
/// via the builder methods.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub seed: Seed,
    /// Generations to advance.
    /// `None` means `LIFE_BOARD_GENERATIONS` from the environment, else 32.
    pub generations: Option<u64>,
    /// Log a summary line every this many generations. 0 disables it.
    pub report_every: u64,
    /// Print the final board as plaintext.
    pub print_board: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: Seed::Pattern("glider".to_string()),
            generations: None,
            report_every: 1,
            print_board: false,
        }
    }
}

impl RunConfig {
    pub fn pattern(mut self, name: impl Into<String>) -> Self {
        self.seed = Seed::Pattern(name.into());
        self
    }

    pub fn random(mut self, size: usize, density: f64, seed: u64) -> Self {
        self.seed = Seed::Random {
            size,
            density,
            seed,
        };
        self
    }

    pub fn generations(mut self, n: u64) -> Self {
        self.generations = Some(n);
        self
    }

    pub fn report_every(mut self, n: u64) -> Self {
        self.report_every = n;
        self
    }

    pub fn print_board(mut self, print: bool) -> Self {
        self.print_board = print;
        self
    }

    /// Generation count after applying the environment fallback.
    pub fn resolved_generations(&self) -> u64 {
        self.generations.unwrap_or_else(|| {
            std::env::var("LIFE_BOARD_GENERATIONS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_GENERATIONS)
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.seed {
            Seed::Pattern(name) => {
                if patterns::find(name).is_none() {
                    return Err(ConfigError::UnknownPattern(name.clone()));
                }
            }
            Seed::Random { size, density, .. } => {
                if *size == 0 {
                    return Err(ConfigError::ZeroSize);
                }
                if !(0.0..=1.0).contains(density) {
                    return Err(ConfigError::InvalidDensity(*density));
                }
            }
        }
        Ok(())
    }

    /// Validate and build generation 0.
    pub fn initial_board(&self) -> Result<Board, ConfigError> {
        self.validate()?;
        let board = match &self.seed {
            Seed::Pattern(name) => patterns::find(name)
                .ok_or_else(|| ConfigError::UnknownPattern(name.clone()))?
                .board()?,
            Seed::Random {
                size,
                density,
                seed,
            } => Board::from_cells(&patterns::random_cells(*size, *size, *density, *seed))?,
        };
        Ok(board)
    }
}
