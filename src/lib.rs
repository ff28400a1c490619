//! Constrained yard layout optimizer.
//!
//! Given a rectangular yard, the required facility blocks, and fixed
//! obstacles, searches for a placement that keeps dock-to-staging travel
//! short and congestion low while respecting clearance and bounds.
//!
//! - **[`random`]**: Seeded Mulberry32 source. Same seed, same layouts.
//! - **[`ga`]**: Fixed-budget, maximizing genetic algorithm with tournament
//!   selection and elitism, generic over the problem.
//! - **[`genesis`]**: The layout domain: data model, geometry, scoring,
//!   operators, and the [`LayoutOptimizer`](genesis::LayoutOptimizer) entry
//!   point.
//!
//! # Features
//!
//! - `serde`: camelCase wire format for all request and result types
//! - `parallel`: rayon population evaluation (results are unchanged)
//! - `wasm`: `optimize_layout` binding for JavaScript hosts
//!
//! Every run is synchronous, allocation-bounded, and shares no state with
//! other runs, so independent requests can run concurrently without
//! coordination. Deadlines are the caller's concern.

pub mod ga;
pub mod genesis;
pub mod random;
#[cfg(feature = "wasm")]
pub mod wasm;
