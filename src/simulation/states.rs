//! Core state types for the 2D N-body sandbox.
//!
//! - `Body`: one simulated mass, position/velocity as `NVec2`
//! - `Camera`: zoom/offset/aspect used by the coordinate mapper
//! - `WorldState`: the ordered body list plus camera, pause flag and the
//!   gravity multiplier handed to the next spawned body
//!
//! Bodies are removed in two phases: a sweep clears `active`, and a later
//! `compact` drops the inactive entries.

use bevy::log::info;
use nalgebra::Vector2;

use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::solar_system;

pub type NVec2 = Vector2<f64>;

/// Lower bound for a body's gravity multiplier
pub const MIN_GRAVITY_MULTIPLIER: f64 = 1.0;
/// Upper bound for a body's gravity multiplier (slider range)
pub const MAX_GRAVITY_MULTIPLIER: f64 = 50.0;
/// Zoom applied on startup and on reset
pub const INITIAL_ZOOM: f64 = 0.30;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // collision + draw radius
    pub g_mult: f64, // scales the force this body exerts
    pub color: [f32; 3], // rgb, 0..1
    pub active: bool, // false = merged away or removed, pending compaction
}

impl Body {
    /// Validated constructor; the body starts active
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, g_mult: f64, color: [f32; 3]) -> Result<Self, SimError> {
        let body = Self { x, v, m, radius, g_mult, color, active: true };
        body.validate()?;
        Ok(body)
    }

    /// Finite state, `m > 0`, `radius > 0`, multiplier in range
    pub fn validate(&self) -> Result<(), SimError> {
        for (what, value) in [("body position", self.x), ("body velocity", self.v)] {
            if let Some(bad) = value.iter().find(|c| !c.is_finite()) {
                return Err(SimError::invalid(what, *bad));
            }
        }
        if !(self.m.is_finite() && self.m > 0.0) {
            return Err(SimError::invalid("body mass", self.m));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SimError::invalid("body radius", self.radius));
        }
        check_gravity_multiplier(self.g_mult)
    }
}

fn check_gravity_multiplier(g_mult: f64) -> Result<(), SimError> {
    if g_mult.is_finite() && (MIN_GRAVITY_MULTIPLIER..=MAX_GRAVITY_MULTIPLIER).contains(&g_mult) {
        Ok(())
    } else {
        Err(SimError::invalid("gravity multiplier", g_mult))
    }
}

/// Pan/zoom parameters shared by input mapping and rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub zoom: f64, // world -> screen scale
    pub offset: NVec2, // world-space translation, applied before scaling
    pub aspect_ratio: f64, // screen width / height
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: INITIAL_ZOOM,
            offset: NVec2::zeros(),
            aspect_ratio: 1.0,
        }
    }
}

impl Camera {
    /// Track a window resize. A zero-height window leaves the ratio untouched
    pub fn set_aspect(&mut self, width: f64, height: f64) {
        if height > 0.0 && width.is_finite() && height.is_finite() {
            self.aspect_ratio = width / height;
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorldState {
    bodies: Vec<Body>,
    pub camera: Camera,
    pending_gravity_multiplier: f64,
    paused: bool,
}

impl WorldState {
    /// Empty world with a default camera
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            camera: Camera::default(),
            pending_gravity_multiplier: MIN_GRAVITY_MULTIPLIER,
            paused: false,
        }
    }

    /// Sun plus eight orbiters on near-circular orbits, zoom 0.30, offset (0, 0)
    pub fn initialize(params: &Parameters) -> Self {
        let mut world = Self::new();
        world.reset(solar_system(params), INITIAL_ZOOM);
        world
    }

    /// Replace the bodies and recenter the camera. Pause state, aspect ratio
    /// and the pending multiplier survive a reset.
    /// Callers pass bodies that already went through `Body::validate`
    pub(crate) fn reset(&mut self, bodies: Vec<Body>, zoom: f64) {
        self.bodies = bodies;
        self.camera.zoom = zoom;
        self.camera.offset = NVec2::zeros();
        info!("world reset with {} bodies", self.bodies.len());
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Number of bodies that still take part in the simulation
    pub fn active_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.active).count()
    }

    /// Append an already-built body. Its fields are public, so it is checked
    /// again here; returns the new index
    pub fn insert_body(&mut self, body: Body) -> Result<usize, SimError> {
        body.validate()?;
        self.bodies.push(body);
        Ok(self.bodies.len() - 1)
    }

    /// Spawn a body at rest at `(wx, wy)` with `m = radius * density`.
    /// Returns the new body's index
    pub fn spawn_body(
        &mut self,
        wx: f64,
        wy: f64,
        radius: f64,
        g_mult: f64,
        color: [f32; 3],
        density: f64,
    ) -> Result<usize, SimError> {
        if !(density.is_finite() && density > 0.0) {
            return Err(SimError::invalid("spawn density", density));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::invalid("spawn radius", radius));
        }
        let body = Body::new(NVec2::new(wx, wy), NVec2::zeros(), radius * density, radius, g_mult, color)?;
        let idx = self.insert_body(body)?;
        info!("spawned body {idx} at ({wx:.3}, {wy:.3}) r={radius:.4} g={g_mult:.2}");
        Ok(idx)
    }

    /// Deactivate every active body whose centre lies closer than
    /// `radius * threshold_factor` to `(wx, wy)`. Returns how many were hit
    pub fn remove_bodies_near(&mut self, wx: f64, wy: f64, threshold_factor: f64) -> Result<usize, SimError> {
        if !(threshold_factor.is_finite() && threshold_factor > 0.0) {
            return Err(SimError::invalid("removal threshold factor", threshold_factor));
        }
        if !(wx.is_finite() && wy.is_finite()) {
            return Err(SimError::invalid("removal point", if wx.is_finite() { wy } else { wx }));
        }

        let p = NVec2::new(wx, wy);
        let mut hit = 0;
        for b in self.bodies.iter_mut().filter(|b| b.active) {
            if (b.x - p).norm() < b.radius * threshold_factor {
                b.active = false;
                hit += 1;
            }
        }
        if hit > 0 {
            info!("removed {hit} bodies near ({wx:.3}, {wy:.3})");
        }
        Ok(hit)
    }

    /// Drop inactive bodies now, keeping survivor order. Returns the number dropped
    pub fn compact(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.active);
        before - self.bodies.len()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("simulation {}", if self.paused { "paused" } else { "resumed" });
    }

    pub fn pending_gravity_multiplier(&self) -> f64 {
        self.pending_gravity_multiplier
    }

    /// Slider input: clamped into [1, 50]. NaN has no position on the slider
    pub fn set_pending_gravity_multiplier(&mut self, value: f64) -> Result<f64, SimError> {
        if value.is_nan() {
            return Err(SimError::invalid("pending gravity multiplier", value));
        }
        self.pending_gravity_multiplier = value.clamp(MIN_GRAVITY_MULTIPLIER, MAX_GRAVITY_MULTIPLIER);
        Ok(self.pending_gravity_multiplier)
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}
