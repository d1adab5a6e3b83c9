use std::time::Instant;

use crate::simulation::integrator::advance;
use crate::simulation::params::Parameters;
use crate::simulation::error::SimError;
use crate::simulation::states::{Body, NVec2, WorldState};

/// Helper to build a world of `n` small, well separated bodies on a spiral
fn make_world(n: usize) -> Result<WorldState, SimError> {
    let mut world = WorldState::new();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let r = 1.0 + 0.05 * i_f;
        let a = i_f * 0.37;
        let b = Body::new(NVec2::new(r * a.cos(), r * a.sin()), NVec2::zeros(), 1.0, 0.001, 1.0, [1.0, 1.0, 1.0])?;
        world.insert_body(b)?;
    }

    Ok(world)
}

/// Time `advance` for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_advance() {
    let params = Parameters::default();

    println!("N,step_ms");

    for n in [200, 400, 800, 1600, 3200] {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 10 } else { 2 };
        let mut world = match make_world(n) {
            Ok(world) => world,
            Err(e) => {
                println!("N = {n}: bad body: {e}");
                continue;
            }
        };

        // Warm-up
        if let Err(e) = advance(&mut world, &params, params.frame_dt) {
            println!("N = {n}: step rejected: {e}");
            continue;
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            if let Err(e) = advance(&mut world, &params, params.frame_dt) {
                println!("N = {n}: step rejected: {e}");
                break;
            }
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
