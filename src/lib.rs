pub mod simulation;
pub mod configuration;
pub mod viewport;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, Camera, WorldState, NVec2};
pub use simulation::error::SimError;
pub use simulation::params::Parameters;
pub use simulation::forces::{PairwiseGravity, SweepReport};
pub use simulation::integrator::{advance, StepReport};
pub use simulation::scenario::{Scenario, solar_system};

pub use configuration::config::{ScenarioConfig, ParametersConfig, CameraConfig, WindowConfig, BodyConfig};

pub use viewport::mapper::{screen_to_world, world_to_screen, world_to_ndc};
pub use viewport::controls::zoom_at_cursor;

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_advance;
