//! Fixed-step time integration for the sandbox
//!
//! One `advance` call: validate, scale `dt` by the physics speed, run the
//! merge/force sweep, drift active bodies with explicit Euler, then compact.

use crate::simulation::error::SimError;
use crate::simulation::forces::PairwiseGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, WorldState};

/// Summary of a single `advance` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub merges: usize, // collisions resolved this step
    pub interactions: usize, // force pairs evaluated
    pub removed: usize, // bodies dropped by compaction
}

/// x_n+1 = x_n + dt * v_n+1 for every active body
pub fn euler_drift(bodies: &mut [Body], dt: f64) {
    for b in bodies.iter_mut().filter(|b| b.active) {
        b.x.x += b.v.x * dt;
        b.x.y += b.v.y * dt;
    }
}

/// Advance the world by one frame of wall-clock time `dt`.
///
/// Negative or non-finite `dt` is rejected before anything changes. A paused
/// world, or `dt == 0`, is left bit-identical.
pub fn advance(world: &mut WorldState, params: &Parameters, dt: f64) -> Result<StepReport, SimError> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(SimError::invalid("time step", dt));
    }
    if world.is_paused() || dt == 0.0 {
        return Ok(StepReport::default());
    }

    // wall-clock -> simulated time
    let dt = dt * params.physics_speed;

    let gravity = PairwiseGravity {
        G: params.G,
        eps: params.eps,
    };

    let bodies = world.bodies_mut();
    let sweep = gravity.sweep(bodies, dt);
    euler_drift(bodies, dt);
    let removed = world.compact();

    Ok(StepReport {
        merges: sweep.merges,
        interactions: sweep.interactions,
        removed,
    })
}
