//! Pairwise gravity for the 2D sandbox
//!
//! Brute-force all-pairs sweep. Each unordered pair `(i, j)`, `i < j`, is
//! either merged (overlap) or exchanges an equal-and-opposite force. Updates
//! are applied in place, so a pair sees the masses/velocities left by the
//! pairs before it in index order.

use bevy::log::debug;

use crate::simulation::collision::{merge, overlaps};
use crate::simulation::states::{Body, NVec2};

/// What one sweep did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub merges: usize, // pairs resolved as collisions
    pub interactions: usize, // pairs that exchanged a force
}

/// Newtonian-like gravity where each body's pull is scaled by its own
/// gravity multiplier. Acceleration still divides by the receiving body's
/// plain mass, so a light body with a large multiplier pulls hard and is
/// itself easily flung.
#[allow(non_snake_case)]
pub struct PairwiseGravity {
    pub G: f64, // gravitational constant
    pub eps: f64, // floor added to distance^2
}

impl PairwiseGravity {
    /// Force magnitude between `bi` and `bj` at squared separation `dist_sq`
    pub fn force(&self, bi: &Body, bj: &Body, dist_sq: f64) -> f64 {
        self.G * (bi.m * bi.g_mult) * (bj.m * bj.g_mult) / dist_sq
    }

    /// Run the merge/force sweep over `bodies` with an already-scaled `dt`
    pub fn sweep(&self, bodies: &mut [Body], dt: f64) -> SweepReport {
        let mut report = SweepReport::default();
        let n = bodies.len();

        for i in 0..n {
            for j in (i + 1)..n {
                // i is never deactivated inside its own row, but an earlier
                // row may already have absorbed it
                if !bodies[i].active || !bodies[j].active {
                    continue;
                }

                // split so we can hold &mut to both sides of the pair
                let (left, right) = bodies.split_at_mut(j);
                let bi = &mut left[i];
                let bj = &mut right[0];

                // r points from i to j
                let r: NVec2 = bj.x - bi.x;
                let dist_sq = r.dot(&r) + self.eps;
                let dist = dist_sq.sqrt();

                if overlaps(dist, bi, bj) {
                    debug!("merge: body {j} (m={:.3}) into body {i} (m={:.3})", bj.m, bi.m);
                    merge(bi, bj);
                    report.merges += 1;
                    continue;
                }

                let f = self.force(bi, bj, dist_sq);

                // unit direction times force, per axis
                let fx = f * r.x / dist;
                let fy = f * r.y / dist;

                // i is pulled along +r, j along -r
                bi.v.x += fx / bi.m * dt;
                bi.v.y += fy / bi.m * dt;
                bj.v.x -= fx / bj.m * dt;
                bj.v.y -= fy / bj.m * dt;

                report.interactions += 1;
            }
        }

        report
    }
}
