//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and the `eps` floor added to squared distances,
//! - the physics-speed factor that turns frame time into simulated time,
//! - spawn density, removal hit radius and zoom step used by input handling

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub eps: f64, // added to distance^2, keeps coincident bodies finite
    pub physics_speed: f64, // simulated seconds per wall-clock second
    pub frame_dt: f64, // fixed step handed to advance() each frame
    pub density: f64, // spawn mass per unit radius
    pub removal_factor: f64, // right-click hit radius, in body radii
    pub zoom_step: f64, // zoom ratio per scroll notch
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 0.005,
            eps: 1e-9,
            physics_speed: 0.07,
            frame_dt: 0.016,
            density: 1200.0,
            removal_factor: 1.2,
            zoom_step: 1.1,
        }
    }
}
