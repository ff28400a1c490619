//! Genetic Algorithm engine.
//!
//! A generic, domain-agnostic GA built on trait-based abstractions.
//! Users define their problem by implementing [`GaProblem`], which specifies
//! how to create, evaluate, crossover, and mutate individuals.
//! Fitness is **maximized**.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its own fitness
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, elites, rates, seed)
//! - [`GaRunner`]: Executes the fixed-budget evolutionary loop
//! - [`GaResult`]: Final sorted population with fitness history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod runner;
mod selection;
mod types;

pub use config::{ConfigError, GaConfig};
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use types::{Fitness, GaProblem, Individual};
