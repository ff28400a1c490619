//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the Genetic Algorithm.
///
/// The loop always runs for exactly `generations` iterations. There is no
/// stagnation detection and no time limit, so latency is a function of the
/// configuration alone.
///
/// # Defaults
///
/// ```
/// use u_genesis::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 60);
/// assert_eq!(config.generations, 120);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genesis::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(70)
///     .with_generations(140)
///     .with_elite_ratio(0.18)
///     .with_seed(1337);
/// assert_eq!(config.elite_count(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Number of contestants per tournament (drawn with replacement).
    pub tournament_size: usize,

    /// Fraction of the population preserved as elites (0.0–1.0).
    ///
    /// Elite individuals are copied unchanged to the next generation.
    pub elite_ratio: f64,

    /// Lower bound on the elite count regardless of `elite_ratio`.
    pub min_elites: usize,

    /// Mutation rate handed to [`GaProblem::mutate`](super::GaProblem::mutate).
    pub mutation_rate: f64,

    /// Whether to evaluate individuals in parallel.
    ///
    /// Only takes effect with the `parallel` feature. Evaluation is pure, so
    /// seeded runs are bit-identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` derives a seed from the wall clock.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 60,
            generations: 120,
            tournament_size: 4,
            elite_ratio: 0.18,
            min_elites: 2,
            mutation_rate: 0.22,
            parallel: false,
            seed: None,
        }
    }
}

/// Reasons a [`GaConfig`] is rejected by [`GaConfig::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least {min}, got {actual}")]
    PopulationTooSmall { min: usize, actual: usize },
    #[error("generations must be at least 1")]
    NoGenerations,
    #[error("tournament_size must be at least 1")]
    EmptyTournament,
    #[error("{name} must lie in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("elites fill the whole population: {elites} of {population}")]
    ElitesFillPopulation { elites: usize, population: usize },
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the minimum number of elites.
    pub fn with_min_elites(mut self, n: usize) -> Self {
        self.min_elites = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Population size actually used by the runner (never zero).
    pub fn effective_population(&self) -> usize {
        self.population_size.max(1)
    }

    /// Number of elites carried into each new generation.
    ///
    /// `floor(population * elite_ratio)`, raised to `min_elites`, capped at
    /// the population size. A NaN ratio counts as zero.
    pub fn elite_count(&self) -> usize {
        let pop = self.effective_population();
        let by_ratio = (pop as f64 * self.elite_ratio).floor();
        let by_ratio = if by_ratio.is_finite() && by_ratio > 0.0 {
            by_ratio as usize
        } else {
            0
        };
        by_ratio.max(self.min_elites).min(pop)
    }

    /// Validates the configuration.
    ///
    /// The runner does not call this: it tolerates degenerate settings by
    /// clamping. Callers that want to reject bad input up front can.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall {
                min: 2,
                actual: self.population_size,
            });
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::EmptyTournament);
        }
        for (name, value) in [
            ("elite_ratio", self.elite_ratio),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        let elites = self.elite_count();
        if elites >= self.population_size {
            return Err(ConfigError::ElitesFillPopulation {
                elites,
                population: self.population_size,
            });
        }
        Ok(())
    }
}
