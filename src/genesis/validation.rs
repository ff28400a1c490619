//! Request limits for callers that accept untrusted input.
//!
//! The optimizer itself never validates: it clamps degenerate values and
//! runs to completion. Cost grows with `generations × population × n²`, so
//! a service exposing it should reject oversized requests first. The
//! defaults of [`RequestLimits`] bound that cost.

use super::types::{OptimizeRequest, Rect};

/// Upper bounds on a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestLimits {
    pub max_population: usize,
    pub max_generations: usize,
    /// Largest yard width or height.
    pub max_yard_size: f64,
    /// Largest dock count and largest staging count.
    pub max_blocks: usize,
    pub max_offices: usize,
    pub max_obstacles: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_population: 200,
            max_generations: 500,
            max_yard_size: 1000.0,
            max_blocks: 100,
            max_offices: 10,
            max_obstacles: 20,
        }
    }
}

/// Why a request was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("yard {field} must be in (0, {max}], got {value}")]
    YardSize {
        field: &'static str,
        value: f64,
        max: f64,
    },
    #[error("minClearance must be non-negative, got {0}")]
    NegativeClearance(f64),
    #[error("{field} must be at most {max}, got {value}")]
    TooMany {
        field: &'static str,
        value: usize,
        max: usize,
    },
    #[error("{field} must be in 1..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: usize,
        max: usize,
    },
    #[error("{field} must lie in [0, 1], got {value}")]
    RateOutOfRange { field: &'static str, value: f64 },
    #[error("obstacle {id:?} has non-finite geometry")]
    BadObstacle { id: String },
}

impl RequestLimits {
    /// Checks a request against these limits, reporting the first violation.
    pub fn validate(&self, request: &OptimizeRequest) -> Result<(), ValidationError> {
        for (field, value) in [("width", request.yard.width), ("height", request.yard.height)] {
            finite(field, value)?;
            if value <= 0.0 || value > self.max_yard_size {
                return Err(ValidationError::YardSize {
                    field,
                    value,
                    max: self.max_yard_size,
                });
            }
        }

        let constraints = &request.constraints;
        finite("minClearance", constraints.min_clearance)?;
        if constraints.min_clearance < 0.0 {
            return Err(ValidationError::NegativeClearance(constraints.min_clearance));
        }
        at_most("dockCount", constraints.dock_count, self.max_blocks)?;
        at_most("stagingCount", constraints.staging_count, self.max_blocks)?;
        at_most("officeCount", constraints.office_count, self.max_offices)?;
        at_most("obstacles", constraints.obstacles.len(), self.max_obstacles)?;
        if let Some(bad) = constraints.obstacles.iter().find(|r| !finite_rect(r)) {
            return Err(ValidationError::BadObstacle { id: bad.id.clone() });
        }

        let physics = &request.physics;
        finite("rho", physics.rho)?;
        finite("v", physics.v)?;
        finite("mu", physics.mu)?;

        let options = &request.options;
        if let Some(population) = options.population {
            in_range("population", population, self.max_population)?;
        }
        if let Some(generations) = options.generations {
            in_range("generations", generations, self.max_generations)?;
        }
        for (field, value) in [
            ("elitePct", options.elite_pct),
            ("mutationRate", options.mutation_rate),
        ] {
            if let Some(value) = value {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ValidationError::RateOutOfRange { field, value });
                }
            }
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

fn at_most(field: &'static str, value: usize, max: usize) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::TooMany { field, value, max });
    }
    Ok(())
}

fn in_range(field: &'static str, value: usize, max: usize) -> Result<(), ValidationError> {
    if value == 0 || value > max {
        return Err(ValidationError::OutOfRange { field, value, max });
    }
    Ok(())
}

fn finite_rect(r: &Rect) -> bool {
    [r.x, r.y, r.w, r.h].iter().all(|v| v.is_finite())
}
