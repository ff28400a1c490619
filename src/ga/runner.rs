//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives a fixed-budget generational loop:
//!
//! ```text
//! Initialized -> Evaluated -> { Advancing <-> Evaluated } -> Terminated
//! ```
//!
//! - **Initialized**: `population_size` individuals from
//!   [`GaProblem::create_individual`].
//! - **Evaluated**: every individual scored, population sorted by descending
//!   fitness.
//! - **Advancing**: elites copied verbatim, remaining slots filled by
//!   tournament → tournament → crossover → mutate.
//! - **Terminated**: after exactly `generations` advances, a final sort.

use super::config::GaConfig;
use super::selection::tournament;
use super::types::{Fitness, GaProblem, Individual};
use crate::random::{create_rng, entropy_seed};
use std::cmp::Ordering;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Final population, sorted by descending fitness.
    pub population: Vec<I>,

    /// The best individual of the final population.
    ///
    /// With at least one elite per generation this is also the best
    /// individual seen over the whole run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Seed the run was started with.
    pub seed: u64,

    /// Best fitness of the initial population, then of each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization to completion.
    ///
    /// Never panics on degenerate configurations: a zero population is
    /// treated as one, and the elite count is capped at the population size.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Individual> {
        let seed = config.seed.unwrap_or_else(entropy_seed);
        let mut rng = create_rng(seed);

        let pop_size = config.effective_population();
        let elite_count = config.elite_count();

        tracing::debug!(
            population = pop_size,
            generations = config.generations,
            elites = elite_count,
            seed,
            "starting GA run"
        );

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..pop_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        // 2. Evaluate initial population
        evaluate_population(problem, &mut population, config.parallel);
        sort_descending(&mut population);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(population[0].fitness().to_f64());

        // 3. Evolutionary loop
        for gen in 0..config.generations {
            let mut next_gen: Vec<P::Individual> = population[..elite_count].to_vec();

            while next_gen.len() < pop_size {
                let p1_idx = tournament(&population, config.tournament_size, &mut rng);
                let p2_idx = tournament(&population, config.tournament_size, &mut rng);

                let mut child =
                    problem.crossover(&population[p1_idx], &population[p2_idx], &mut rng);
                problem.mutate(&mut child, config.mutation_rate, &mut rng);

                next_gen.push(child);
            }

            // Elites keep their evaluation; scoring is pure.
            evaluate_population(problem, &mut next_gen[elite_count..], config.parallel);

            population = next_gen;
            sort_descending(&mut population);

            let gen_best = population[0].fitness();
            fitness_history.push(gen_best.to_f64());
            problem.on_generation(gen + 1, gen_best);

            tracing::trace!(generation = gen + 1, best = gen_best.to_f64(), "generation");
        }

        let best = population[0].clone();
        tracing::debug!(best = best.fitness().to_f64(), "GA run finished");

        GaResult {
            best_fitness: best.fitness(),
            best,
            population,
            generations: config.generations,
            seed,
            fitness_history,
        }
    }
}

/// Stable sort by descending fitness. Incomparable values keep their order.
fn sort_descending<I: Individual>(population: &mut [I]) {
    population.sort_by(|a, b| {
        b.fitness()
            .partial_cmp(&a.fitness())
            .unwrap_or(Ordering::Equal)
    });
}

/// Evaluate all individuals in the slice.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    use rayon::prelude::*;

    if parallel {
        population
            .par_iter_mut()
            .for_each(|ind| problem.evaluate(ind));
    } else {
        population.iter_mut().for_each(|ind| problem.evaluate(ind));
    }
}

/// Evaluate all individuals in the slice.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    population.iter_mut().for_each(|ind| problem.evaluate(ind));
}

// ============================================================================
// Tests
// ============================================================================
