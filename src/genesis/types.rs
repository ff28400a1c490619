//! Yard layout data model.
//!
//! With the `serde` feature every type serializes with stable camelCase wire
//! names: `{id, x, y, w, h, type}` for rects and
//! `{travelMetersEstimate, congestionIndex, viscosityIndex, reynolds, fitness}`
//! for layout metadata.

use crate::ga::{Fitness, GaConfig, Individual};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of a rectangle in the yard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlockKind {
    /// Truck loading dock.
    Dock,
    /// Staging area next to the docks.
    Staging,
    /// Office building.
    Office,
    /// Fixed caller-supplied obstruction. Never moved by the optimizer.
    Obstacle,
}

impl BlockKind {
    /// Nominal `(w, h)` of a freshly generated block of this kind.
    pub fn nominal_size(self) -> (f64, f64) {
        match self {
            BlockKind::Dock => (14.0, 6.0),
            BlockKind::Staging => (10.0, 10.0),
            BlockKind::Office => (12.0, 10.0),
            BlockKind::Obstacle => (10.0, 10.0),
        }
    }

    /// Lowercase tag, also used as the id prefix of generated blocks.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Dock => "dock",
            BlockKind::Staging => "staging",
            BlockKind::Office => "office",
            BlockKind::Obstacle => "obstacle",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned rectangle with a stable identity.
///
/// `(x, y)` is the minimum corner; the rect spans `[x, x + w] × [y, y + h]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: BlockKind,
}

impl Rect {
    pub fn new(id: impl Into<String>, kind: BlockKind, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
            kind,
        }
    }
}

/// Yard dimensions. The yard spans `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YardSpec {
    pub width: f64,
    pub height: f64,
}

impl YardSpec {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Placement requirements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GenesisConstraints {
    /// Minimum empty gap between any two rectangles, obstacles included.
    pub min_clearance: f64,
    pub dock_count: usize,
    pub staging_count: usize,
    /// Defaults to one office when omitted on the wire.
    #[cfg_attr(feature = "serde", serde(default = "default_office_count"))]
    pub office_count: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Rect>,
}

#[cfg(feature = "serde")]
fn default_office_count() -> usize {
    1
}

impl GenesisConstraints {
    /// Constraints with the given dock and staging counts, one office,
    /// no clearance and no obstacles.
    pub fn new(dock_count: usize, staging_count: usize) -> Self {
        Self {
            min_clearance: 0.0,
            dock_count,
            staging_count,
            office_count: 1,
            obstacles: Vec::new(),
        }
    }

    pub fn with_min_clearance(mut self, clearance: f64) -> Self {
        self.min_clearance = clearance;
        self
    }

    pub fn with_office_count(mut self, n: usize) -> Self {
        self.office_count = n;
        self
    }

    pub fn with_obstacle(mut self, obstacle: Rect) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Total number of decision blocks.
    pub fn block_count(&self) -> usize {
        self.dock_count + self.staging_count + self.office_count
    }
}

/// Inputs to the Reynolds-style flow score, `Re = rho * v * L / mu`.
///
/// Non-positive values are floored to a small epsilon during scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenesisPhysics {
    /// Density proxy (operational load intensity).
    pub rho: f64,
    /// Characteristic velocity proxy (average vehicle speed).
    pub v: f64,
    /// Base viscosity proxy (process friction).
    pub mu: f64,
}

impl GenesisPhysics {
    pub fn new(rho: f64, v: f64, mu: f64) -> Self {
        Self { rho, v, mu }
    }
}

/// Score breakdown of one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutMeta {
    /// Mean dock-to-nearest-staging center distance, or the no-route sentinel.
    pub travel_meters_estimate: f64,
    /// Occupancy and complexity blend in `[0, 1]`.
    pub congestion_index: f64,
    /// Effective viscosity; lower is better.
    pub viscosity_index: f64,
    pub reynolds: f64,
    /// Higher is better.
    pub fitness: f64,
}

impl LayoutMeta {
    /// Placeholder for layouts that have not been scored yet.
    pub fn unscored() -> Self {
        Self {
            travel_meters_estimate: 0.0,
            congestion_index: 0.0,
            viscosity_index: 0.0,
            reynolds: 0.0,
            fitness: f64::worst(),
        }
    }
}

/// One candidate layout: every decision block placed, plus its score.
///
/// Obstacles are not part of `blocks`; they are merged in at scoring time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YardLayout {
    pub yard: YardSpec,
    pub blocks: Vec<Rect>,
    pub meta: LayoutMeta,
}

impl Individual for YardLayout {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.meta.fitness
    }
}

/// Optional search parameters. Unset fields take the defaults of
/// [`GaConfig::default`]: population 60, 120 generations, elite share 0.18,
/// mutation rate 0.22, clock-derived seed.
///
/// The seed is signed so that any integer a caller sends is accepted. It is
/// reinterpreted as `u64`, and only its low 32 bits reach the generator, so
/// `-1` and `4294967295` name the same run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct OptimizeOptions {
    pub population: Option<usize>,
    pub generations: Option<usize>,
    pub elite_pct: Option<f64>,
    pub mutation_rate: Option<f64>,
    pub seed: Option<i64>,
}

impl OptimizeOptions {
    /// Resolves the options into an engine configuration.
    ///
    /// Rates are taken as given; range checks belong to
    /// [`RequestLimits`](super::RequestLimits).
    pub fn to_config(&self) -> GaConfig {
        let defaults = GaConfig::default();
        GaConfig {
            population_size: self.population.unwrap_or(defaults.population_size),
            generations: self.generations.unwrap_or(defaults.generations),
            elite_ratio: self.elite_pct.unwrap_or(defaults.elite_ratio),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            seed: self.seed.map(|s| s as u64),
            ..defaults
        }
    }

    pub fn with_population(mut self, n: usize) -> Self {
        self.population = Some(n);
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = Some(n);
        self
    }

    pub fn with_elite_pct(mut self, pct: f64) -> Self {
        self.elite_pct = Some(pct);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = Some(rate);
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Everything one optimization call needs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizeRequest {
    pub yard: YardSpec,
    pub constraints: GenesisConstraints,
    pub physics: GenesisPhysics,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: OptimizeOptions,
}

/// Best layout plus a shortlist of the top candidates, best first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizeResult {
    pub best: YardLayout,
    pub candidates: Vec<YardLayout>,
}
