//! Yard layout optimization.
//!
//! Places the required facility blocks (loading docks, staging areas,
//! offices) in a rectangular yard around fixed obstacles. Candidates are
//! scored by dock-to-staging travel, clearance and bounds penalties, and a
//! Reynolds-style flow ratio that congestion degrades. The search itself is
//! the generic [`GaRunner`](crate::ga::GaRunner).
//!
//! # Key Types
//!
//! - [`OptimizeRequest`]: yard, constraints, physics, search options
//! - [`LayoutOptimizer`]: runs one stateless search
//! - [`OptimizeResult`]: best layout and a top-8 shortlist
//! - [`RequestLimits`]: opt-in input limits for request handlers
//!
//! # Submodules
//!
//! - [`geometry`]: clearance-aware overlap, clamping, center distances
//! - [`scoring`]: penalties, travel, congestion, viscosity, Reynolds, fitness
//! - [`operators`]: templates, random placement, id-keyed crossover, mutation

pub mod geometry;
pub mod operators;
mod optimizer;
mod problem;
pub mod scoring;
mod types;
mod validation;

pub use optimizer::{optimize, LayoutOptimizer, SHORTLIST_LEN};
pub use problem::LayoutProblem;
pub use types::{
    BlockKind, GenesisConstraints, GenesisPhysics, LayoutMeta, OptimizeOptions, OptimizeRequest,
    OptimizeResult, Rect, YardLayout, YardSpec,
};
pub use validation::{RequestLimits, ValidationError};
