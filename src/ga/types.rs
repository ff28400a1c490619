//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] define the contract between the generic
//! evolutionary loop and a domain-specific problem such as yard layout.

use rand::Rng;

/// Marker trait for fitness values.
///
/// **Higher fitness is better** (maximization). Penalty-style objectives
/// should be negated by the problem before they reach the engine.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value that every real fitness beats.
    ///
    /// Used for individuals that have not been evaluated yet.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own evaluation. The engine calls
/// [`GaProblem::evaluate`] to fill it in and reads it back through
/// [`fitness`](Individual::fitness).
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: how to create a random individual
/// 2. **Evaluation**: how to score an individual in place
/// 3. **Crossover**: how to recombine two parents into one child
/// 4. **Mutation**: how to perturb a child
///
/// # Randomness
///
/// The engine hands the same generator to every hook, in a fixed order:
/// parent A selection, parent B selection, crossover, mutation. Problems
/// must consume draws deterministically for seeded runs to reproduce.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the engine may evaluate
/// individuals in parallel with rayon (`parallel` feature). Evaluation
/// receives no generator, so parallel scoring never perturbs the draw order.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    ///
    /// The result does not need to be feasible. Infeasibility is expected to
    /// show up as a penalty during evaluation.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual and stores the result on it.
    ///
    /// Must be a pure function of the individual's genes.
    fn evaluate(&self, individual: &mut Self::Individual);

    /// Produces exactly one child by recombining two parents.
    ///
    /// The default implementation clones `parent1` (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates a child in place.
    ///
    /// `rate` is the configured mutation rate. How it is applied (per gene,
    /// per individual) is up to the problem. The default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rate: f64, _rng: &mut R) {}

    /// Called at the end of each generation with the generation's best fitness.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
