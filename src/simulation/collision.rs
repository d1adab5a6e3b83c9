//! Contact test and perfectly inelastic merge between two bodies.

use crate::simulation::states::Body;

/// Two bodies touch when their centre distance is below the sum of radii
pub fn overlaps(dist: f64, a: &Body, b: &Body) -> bool {
    dist < a.radius + b.radius
}

/// Fold `absorbed` into `survivor`.
///
/// - mass adds up
/// - velocity is the mass-weighted average (momentum conserved)
/// - radius grows by area: `sqrt(r1^2 + r2^2)`
///
/// The survivor keeps its position, colour and gravity multiplier; the
/// absorbed body is only flagged inactive and is dropped at compaction.
pub fn merge(survivor: &mut Body, absorbed: &mut Body) {
    let m = survivor.m + absorbed.m;

    survivor.v = (survivor.v * survivor.m + absorbed.v * absorbed.m) / m;
    survivor.radius = (survivor.radius * survivor.radius + absorbed.radius * absorbed.radius).sqrt();
    survivor.m = m;

    absorbed.active = false;
}
