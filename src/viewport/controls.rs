//! Pure input-handling helpers used by the viewer: zoom-to-cursor, the
//! gravity slider at the bottom of the screen, and press-duration spawn sizing.

use crate::simulation::states::{Camera, MAX_GRAVITY_MULTIPLIER, MIN_GRAVITY_MULTIPLIER};
use crate::viewport::mapper::screen_to_world;

/// Colour given to bodies placed by the user
pub const SPAWN_COLOR: [f32; 3] = [0.4, 0.6, 1.0];

/// Spawn radius at zero hold time, in NDC units
const SPAWN_BASE_RADIUS: f64 = 0.02;
/// Radius growth per second of holding the button, in NDC units
const SPAWN_GROWTH_PER_SEC: f64 = 0.05;

/// Slider bar extent in NDC: |sx| < SLIDER_HALF_WIDTH, sy < SLIDER_TOP
pub const SLIDER_HALF_WIDTH: f64 = 0.5;
pub const SLIDER_TOP: f64 = -0.8;

/// Multiply zoom by `factor` while keeping the world point under the cursor
/// `(px, py)` fixed.
///
/// Zoom changes first; the offset is then corrected by the drift the zoom
/// caused at the cursor. Both the zoom and the offset must stay finite and
/// the zoom positive, otherwise the camera is left as it was.
pub fn zoom_at_cursor(camera: &mut Camera, px: f64, py: f64, screen_w: f64, screen_h: f64, factor: f64) -> bool {
    let new_zoom = camera.zoom * factor;
    if !(new_zoom.is_finite() && new_zoom > 0.0) {
        return false;
    }

    let before = screen_to_world(px, py, screen_w, screen_h, camera);
    camera.zoom = new_zoom;
    let after = screen_to_world(px, py, screen_w, screen_h, camera);

    // wx = sx * a / z - ox, so moving ox by (after - before) cancels the drift
    camera.offset += after - before;
    true
}

/// One scroll notch: `step` in for positive `scroll_y`, `1/step` out otherwise
pub fn zoom_factor(scroll_y: f64, step: f64) -> f64 {
    if scroll_y > 0.0 {
        step
    } else {
        1.0 / step
    }
}

/// World radius for a body spawned after holding the button `hold_secs`
/// seconds. Divided by zoom so a press draws the same on-screen size at any
/// zoom level.
pub fn spawn_radius(hold_secs: f64, zoom: f64) -> f64 {
    (SPAWN_BASE_RADIUS + hold_secs.max(0.0) * SPAWN_GROWTH_PER_SEC) / zoom
}

/// Is the NDC point inside the slider bar
pub fn in_slider(sx: f64, sy: f64) -> bool {
    sy < SLIDER_TOP && sx.abs() < SLIDER_HALF_WIDTH
}

/// Gravity multiplier selected by a click at NDC `(sx, sy)`, if it hit the bar
pub fn slider_value(sx: f64, sy: f64) -> Option<f64> {
    in_slider(sx, sy).then(|| {
        let t = (sx + SLIDER_HALF_WIDTH) / (2.0 * SLIDER_HALF_WIDTH);
        MIN_GRAVITY_MULTIPLIER + t * (MAX_GRAVITY_MULTIPLIER - MIN_GRAVITY_MULTIPLIER)
    })
}

/// NDC x of the slider knob for multiplier `g`
pub fn slider_knob_x(g: f64) -> f64 {
    let t = (g - MIN_GRAVITY_MULTIPLIER) / (MAX_GRAVITY_MULTIPLIER - MIN_GRAVITY_MULTIPLIER);
    -SLIDER_HALF_WIDTH + t * 2.0 * SLIDER_HALF_WIDTH
}

/// Tracks a left-button press that will spawn a body on release
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressTimer {
    started: Option<f64>,
}

impl PressTimer {
    /// Button went down at `now`; a fresh press always restarts the clock
    pub fn press(&mut self, now: f64) {
        self.started = Some(now);
    }

    /// Start the clock only if no press is open (button held while entering the window)
    pub fn press_if_idle(&mut self, now: f64) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// Button released over the window: how long it was held, if a press was open
    pub fn release(&mut self, now: f64) -> Option<f64> {
        self.started.take().map(|start| now - start)
    }

    /// Button released where nothing can spawn, e.g. outside the window
    pub fn cancel(&mut self) {
        self.started = None;
    }

    pub fn is_open(&self) -> bool {
        self.started.is_some()
    }
}
