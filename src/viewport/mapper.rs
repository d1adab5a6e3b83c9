//! Screen <-> world coordinate mapping.
//!
//! Single source of truth for both input hit-testing and rendering. Three
//! spaces are involved:
//!
//! - device pixels: origin top-left, y down, `0..w` x `0..h`
//! - NDC: origin at the centre, y up, `-1..1` on both axes
//! - world: unbounded, y up
//!
//! Forward map (pixels -> world):
//!
//! ```text
//! sx = (px / w) * 2 - 1          sy = 1 - (py / h) * 2
//! wx = sx * aspect / zoom - ox   wy = sy / zoom - oy
//! ```
//!
//! `world_to_ndc` / `world_to_screen` are its exact algebraic inverse.

use crate::simulation::states::{Camera, NVec2};

/// Device pixel -> NDC (flips y)
pub fn pixel_to_ndc(px: f64, py: f64, screen_w: f64, screen_h: f64) -> NVec2 {
    NVec2::new((px / screen_w) * 2.0 - 1.0, 1.0 - (py / screen_h) * 2.0)
}

/// NDC -> device pixel
pub fn ndc_to_pixel(ndc: NVec2, screen_w: f64, screen_h: f64) -> NVec2 {
    NVec2::new((ndc.x + 1.0) * 0.5 * screen_w, (1.0 - ndc.y) * 0.5 * screen_h)
}

/// Device pixel -> world point
pub fn screen_to_world(px: f64, py: f64, screen_w: f64, screen_h: f64, camera: &Camera) -> NVec2 {
    let s = pixel_to_ndc(px, py, screen_w, screen_h);
    NVec2::new(
        s.x * camera.aspect_ratio / camera.zoom - camera.offset.x,
        s.y / camera.zoom - camera.offset.y,
    )
}

/// World point -> NDC, the projection the renderer draws with
pub fn world_to_ndc(world: NVec2, camera: &Camera) -> NVec2 {
    NVec2::new(
        (world.x + camera.offset.x) * camera.zoom / camera.aspect_ratio,
        (world.y + camera.offset.y) * camera.zoom,
    )
}

/// World point -> device pixel
pub fn world_to_screen(world: NVec2, screen_w: f64, screen_h: f64, camera: &Camera) -> NVec2 {
    ndc_to_pixel(world_to_ndc(world, camera), screen_w, screen_h)
}

/// World length -> NDC length along y (x is the same length divided by aspect)
pub fn world_len_to_ndc(len: f64, camera: &Camera) -> f64 {
    len * camera.zoom
}
