//! Build fully-initialized sandbox scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - numerical parameters (`Parameters`)
//! - the live world (`WorldState`)
//! - the starting bodies and zoom, kept for resets
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, physics and drawing systems

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, WorldState};

/// Mass of the central body in the built-in preset
pub const CENTRAL_MASS: f64 = 2000.0;

/// Sun at rest in the origin plus eight orbiters on the +x axis, each given
/// the circular-orbit speed `sqrt(G * M / d)` along +y
pub fn solar_system(params: &Parameters) -> Vec<Body> {
    let mut bodies = vec![Body {
        x: NVec2::zeros(),
        v: NVec2::zeros(),
        m: CENTRAL_MASS,
        radius: 0.22,
        g_mult: 1.0,
        color: [1.0, 0.9, 0.2],
        active: true,
    }];

    // (distance, mass, radius, color)
    let orbiters: [(f64, f64, f64, [f32; 3]); 8] = [
        (0.4, 0.5, 0.03, [0.6, 0.6, 0.6]),
        (0.7, 0.9, 0.05, [0.9, 0.7, 0.4]),
        (1.0, 1.0, 0.055, [0.2, 0.5, 1.0]),
        (1.5, 0.7, 0.045, [0.9, 0.3, 0.2]),
        (2.5, 12.0, 0.12, [0.8, 0.7, 0.5]),
        (3.5, 10.0, 0.10, [0.9, 0.8, 0.6]),
        (4.5, 7.0, 0.08, [0.5, 0.8, 0.9]),
        (5.5, 7.0, 0.08, [0.3, 0.4, 0.9]),
    ];

    for (d, m, radius, color) in orbiters {
        bodies.push(Body {
            x: NVec2::new(d, 0.0),
            v: NVec2::new(0.0, circular_speed(params.G, CENTRAL_MASS, d)),
            m,
            radius,
            g_mult: 1.0,
            color,
            active: true,
        });
    }

    bodies
}

/// Speed of a circular orbit at distance `d` around mass `central_mass`
pub fn circular_speed(g: f64, central_mass: f64, d: f64) -> f64 {
    (g * central_mass / d).sqrt()
}

/// Bevy resource holding the running sandbox
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub world: WorldState,
    initial_bodies: Vec<Body>, // validated, restored on reset
    initial_zoom: f64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            eps: p_cfg.eps,
            physics_speed: p_cfg.physics_speed,
            frame_dt: p_cfg.frame_dt,
            density: p_cfg.density,
            removal_factor: p_cfg.removal_factor,
            zoom_step: p_cfg.zoom_step,
        };

        require_positive("G", parameters.G)?;
        require_positive("eps", parameters.eps)?;
        require_positive("physics speed", parameters.physics_speed)?;
        require_positive("frame dt", parameters.frame_dt)?;
        require_positive("density", parameters.density)?;
        require_positive("removal factor", parameters.removal_factor)?;
        require_positive("zoom step", parameters.zoom_step)?;
        let zoom = cfg.camera.zoom;
        require_positive("camera zoom", zoom)?;

        // Bodies: explicit list from the file, or the preset
        let initial_bodies = match cfg.bodies {
            Some(list) => list.iter().map(body_from_config).collect::<Result<Vec<_>, _>>()?,
            None => solar_system(&parameters),
        };

        let mut world = WorldState::new();
        world.reset(initial_bodies.clone(), zoom);

        Ok(Self {
            parameters,
            world,
            initial_bodies,
            initial_zoom: zoom,
        })
    }

    /// Restore the starting bodies and camera
    pub fn reset(&mut self) {
        self.world.reset(self.initial_bodies.clone(), self.initial_zoom);
    }
}

/// Finite and strictly positive, or `InvalidArgument`
fn require_positive(what: &'static str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(what, value))
    }
}

fn body_from_config(bc: &BodyConfig) -> Result<Body, SimError> {
    Body::new(
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.m,
        bc.radius,
        bc.g_mult,
        bc.color,
    )
}
