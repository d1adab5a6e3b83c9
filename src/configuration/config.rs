//! Configuration types for loading sandbox scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and input tuning
//! - [`CameraConfig`]     – starting zoom
//! - [`WindowConfig`]     – initial window size
//! - [`BodyConfig`]       – optional explicit starting bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section falls back to the reference values, so an empty document is
//! a valid scenario (the built-in solar system).
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 0.005                # gravitational constant
//!   eps: 1.0e-9             # added to distance^2
//!   physics_speed: 0.07     # simulated time per wall-clock second
//!   frame_dt: 0.016         # step passed to the engine each frame
//!   density: 1200.0         # spawn mass per unit radius
//!   removal_factor: 1.2     # right-click hit radius, in body radii
//!   zoom_step: 1.1          # zoom ratio per scroll notch
//!
//! camera:
//!   zoom: 0.30
//!
//! window:
//!   width: 1280
//!   height: 720
//!
//! bodies:                   # omit for the solar system preset
//!   - x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 2000.0
//!     radius: 0.22
//!     color: [1.0, 0.9, 0.2]
//! ```

use serde::Deserialize;

use crate::simulation::params::Parameters;
use crate::simulation::states::INITIAL_ZOOM;

/// Global physical parameters and input tuning
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,              // gravitational constant
    pub eps: f64,            // distance^2 floor
    pub physics_speed: f64,  // simulated time scale
    pub frame_dt: f64,       // per-frame step
    pub density: f64,        // spawn mass per unit radius
    pub removal_factor: f64, // removal hit radius in body radii
    pub zoom_step: f64,      // per-notch zoom ratio
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            G: p.G,
            eps: p.eps,
            physics_speed: p.physics_speed,
            frame_dt: p.frame_dt,
            density: p.density,
            removal_factor: p.removal_factor,
            zoom_step: p.zoom_step,
        }
    }
}

/// Starting camera
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub zoom: f64, // world -> screen scale at start and after reset
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { zoom: INITIAL_ZOOM }
    }
}

/// Initial window size in logical pixels
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 1280, height: 720 }
    }
}

fn default_g_mult() -> f64 {
    1.0
}

fn default_color() -> [f32; 3] {
    [0.4, 0.6, 1.0]
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position
    #[serde(default)]
    pub v: [f64; 2], // initial velocity
    pub m: f64,      // mass
    pub radius: f64, // collision/draw radius
    #[serde(default = "default_g_mult")]
    pub g_mult: f64, // gravity multiplier, 1..=50
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub camera: CameraConfig,
    pub window: WindowConfig,
    pub bodies: Option<Vec<BodyConfig>>, // None -> solar system preset
}
