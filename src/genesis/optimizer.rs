//! Optimizer entry points.

use super::problem::LayoutProblem;
use super::types::{
    GenesisConstraints, GenesisPhysics, OptimizeOptions, OptimizeRequest, OptimizeResult,
    YardLayout, YardSpec,
};
use crate::ga::{GaResult, GaRunner};

/// Number of layouts in the returned shortlist.
pub const SHORTLIST_LEN: usize = 8;

/// Stateless yard layout optimizer.
///
/// Each call builds its own population and generator and runs a fixed
/// number of generations. Concurrent calls share nothing.
///
/// # Usage
///
/// ```
/// use u_genesis::genesis::{
///     GenesisConstraints, GenesisPhysics, LayoutOptimizer, OptimizeOptions, OptimizeRequest,
///     YardSpec,
/// };
///
/// let request = OptimizeRequest {
///     yard: YardSpec::new(120.0, 80.0),
///     constraints: GenesisConstraints::new(2, 2).with_min_clearance(1.0),
///     physics: GenesisPhysics::new(1.2, 9.5, 1.0),
///     options: OptimizeOptions::default()
///         .with_population(20)
///         .with_generations(10)
///         .with_seed(7),
/// };
/// let result = LayoutOptimizer::optimize(&request);
/// assert_eq!(result.best, result.candidates[0]);
/// ```
pub struct LayoutOptimizer;

impl LayoutOptimizer {
    /// Runs the search and returns the best layout and the top-8 shortlist.
    pub fn optimize(request: &OptimizeRequest) -> OptimizeResult {
        let GaResult {
            mut population,
            best,
            ..
        } = Self::evolve(request);
        population.truncate(SHORTLIST_LEN);
        OptimizeResult {
            best,
            candidates: population,
        }
    }

    /// Runs the search and returns the full engine result: the final sorted
    /// population, the seed used, and the per-generation best fitness.
    pub fn evolve(request: &OptimizeRequest) -> GaResult<YardLayout> {
        let config = request.options.to_config();
        tracing::info!(
            width = request.yard.width,
            height = request.yard.height,
            blocks = request.constraints.block_count(),
            obstacles = request.constraints.obstacles.len(),
            population = config.population_size,
            generations = config.generations,
            "optimizing yard layout"
        );

        let problem = LayoutProblem::new(request.yard, &request.constraints, request.physics);
        GaRunner::run(&problem, &config)
    }
}

/// Convenience wrapper around [`LayoutOptimizer::optimize`].
pub fn optimize(
    yard: YardSpec,
    constraints: GenesisConstraints,
    physics: GenesisPhysics,
    options: OptimizeOptions,
) -> OptimizeResult {
    LayoutOptimizer::optimize(&OptimizeRequest {
        yard,
        constraints,
        physics,
        options,
    })
}
