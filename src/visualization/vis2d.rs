use bevy::input::mouse::MouseWheel;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::configuration::config::WindowConfig;
use crate::simulation::integrator::advance;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, Camera as ViewCamera, NVec2};
use crate::viewport::controls::{
    slider_knob_x, slider_value, spawn_radius, zoom_at_cursor, zoom_factor, PressTimer, SLIDER_HALF_WIDTH,
    SPAWN_COLOR,
};
use crate::viewport::mapper::{pixel_to_ndc, screen_to_world, world_len_to_ndc, world_to_ndc};

/// Component tagging each disc with its index into the world's body list
#[derive(Component)]
struct BodyIndex(pub usize);

/// Unit circle shared by every body; size comes from the transform scale
#[derive(Resource)]
struct BodyMesh(Mesh2dHandle);

/// Left-button press that went down outside the slider
#[derive(Resource, Default)]
struct PressState(PressTimer);

const GRID_STEP: f64 = 0.5;
const GRID_LINES: i32 = 40; // per side, so the grid spans +-20 world units

pub fn run_2d(scenario: Scenario, window: WindowConfig) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.world.bodies().len());

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::srgb(0.01, 0.01, 0.02)))
        .init_resource::<PressState>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "SpaceTime Zoom Lab".into(),
                resolution: WindowResolution::new(window.width as f32, window.height as f32),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_system)
        // chained: input, then one physics step, then drawing sees the finished step
        .add_systems(
            Update,
            (
                aspect_system,
                keyboard_system,
                scroll_zoom_system,
                mouse_system,
                physics_step_system,
                sync_bodies_system,
                draw_overlay_system,
            )
                .chain(),
        )
        .run();
}

fn setup_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    // 2D camera: one world unit per logical pixel, origin at the window centre
    commands.spawn(Camera2dBundle::default());
    commands.insert_resource(BodyMesh(Mesh2dHandle(meshes.add(Circle::new(1.0)))));
}

fn aspect_system(windows: Query<&Window, With<PrimaryWindow>>, mut scenario: ResMut<Scenario>) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    scenario.world.camera.set_aspect(window.width() as f64, window.height() as f64);
}

fn keyboard_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.reset();
    }
    if keys.just_pressed(KeyCode::Space) {
        scenario.world.toggle_pause();
    }
}

fn scroll_zoom_system(
    mut wheel: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scenario: ResMut<Scenario>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let step = scenario.parameters.zoom_step;

    for ev in wheel.read() {
        if ev.y == 0.0 {
            continue;
        }
        zoom_at_cursor(
            &mut scenario.world.camera,
            cursor.x as f64,
            cursor.y as f64,
            window.width() as f64,
            window.height() as f64,
            zoom_factor(ev.y as f64, step),
        );
    }
}

fn mouse_system(
    buttons: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut press: ResMut<PressState>,
    mut scenario: ResMut<Scenario>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        // released off-window: nowhere to spawn, and the next click must start fresh
        if !buttons.pressed(MouseButton::Left) {
            press.0.cancel();
        }
        return;
    };
    let (w, h) = (window.width() as f64, window.height() as f64);
    let (px, py) = (cursor.x as f64, cursor.y as f64);
    let now = time.elapsed_seconds_f64();

    let Scenario { world, parameters, .. } = &mut *scenario;
    let target = screen_to_world(px, py, w, h, &world.camera);

    // Right button: delete whatever is under the cursor
    if buttons.pressed(MouseButton::Right) {
        match world.remove_bodies_near(target.x, target.y, parameters.removal_factor) {
            Ok(hit) if hit > 0 => {
                // the physics step may be paused, so drop them now
                world.compact();
            }
            Ok(_) => {}
            Err(e) => warn!("remove rejected: {e}"),
        }
    }

    // Left button: drag the slider, or press-and-release to spawn
    let ndc = pixel_to_ndc(px, py, w, h);
    if buttons.pressed(MouseButton::Left) {
        if let Some(g) = slider_value(ndc.x, ndc.y) {
            if let Err(e) = world.set_pending_gravity_multiplier(g) {
                warn!("slider rejected: {e}");
            }
        } else if buttons.just_pressed(MouseButton::Left) {
            press.0.press(now);
        } else {
            press.0.press_if_idle(now);
        }
    } else if let Some(held) = press.0.release(now) {
        let radius = spawn_radius(held, world.camera.zoom);
        let g_mult = world.pending_gravity_multiplier();
        if let Err(e) = world.spawn_body(target.x, target.y, radius, g_mult, SPAWN_COLOR, parameters.density) {
            warn!("spawn rejected: {e}");
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario { world, parameters, .. } = &mut *scenario;

    if let Err(e) = advance(world, parameters, parameters.frame_dt) {
        warn!("physics step rejected: {e}");
    }
}

/// NDC -> Camera2d space (logical pixels, centred, y up)
fn ndc_to_view(ndc: NVec2, half: Vec2) -> Vec2 {
    Vec2::new(ndc.x as f32 * half.x, ndc.y as f32 * half.y)
}

fn body_transform(b: &Body, camera: &ViewCamera, half: Vec2) -> Transform {
    let pos = ndc_to_view(world_to_ndc(b.x, camera), half);
    // x radius is r*zoom/aspect * w/2 == r*zoom * h/2, so the disc stays round
    let r = if b.active { world_len_to_ndc(b.radius, camera) as f32 * half.y } else { 0.0 };
    Transform::from_xyz(pos.x, pos.y, 0.0).with_scale(Vec3::new(r, r, 1.0))
}

fn body_color(b: &Body) -> Color {
    Color::srgb(b.color[0], b.color[1], b.color[2])
}

/// Keep exactly one disc entity per body and move them to the current state
fn sync_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    body_mesh: Res<BodyMesh>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &BodyIndex, &mut Transform, &Handle<ColorMaterial>)>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let half = Vec2::new(window.width(), window.height()) * 0.5;
    let camera = &scenario.world.camera;
    let bodies = scenario.world.bodies();

    let mut drawn = vec![false; bodies.len()];
    for (entity, BodyIndex(i), mut transform, mat_handle) in &mut query {
        let Some(b) = bodies.get(*i) else {
            commands.entity(entity).despawn();
            continue;
        };
        drawn[*i] = true;
        *transform = body_transform(b, camera, half);
        // merges shift indices, so the colour has to follow the body
        if let Some(mat) = materials.get_mut(mat_handle) {
            mat.color = body_color(b);
        }
    }

    for (i, b) in bodies.iter().enumerate() {
        if drawn[i] {
            continue;
        }
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: body_mesh.0.clone(),
                material: materials.add(ColorMaterial::from(body_color(b))),
                transform: body_transform(b, camera, half),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Background grid in world space plus the gravity slider in screen space
fn draw_overlay_system(mut gizmos: Gizmos, scenario: Res<Scenario>, windows: Query<&Window, With<PrimaryWindow>>) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let half = Vec2::new(window.width(), window.height()) * 0.5;
    let camera = &scenario.world.camera;
    let world_pt = |x: f64, y: f64| ndc_to_view(world_to_ndc(NVec2::new(x, y), camera), half);
    let screen_pt = |x: f64, y: f64| ndc_to_view(NVec2::new(x, y), half);

    let grid_color = Color::srgba(0.2, 0.3, 0.5, 0.15);
    let extent = GRID_STEP * GRID_LINES as f64;
    for k in -GRID_LINES..=GRID_LINES {
        let c = k as f64 * GRID_STEP;
        gizmos.line_2d(world_pt(c, -extent), world_pt(c, extent), grid_color);
        gizmos.line_2d(world_pt(-extent, c), world_pt(extent, c), grid_color);
    }

    // bar: green (weak) -> red (strong)
    let green = Color::srgb(0.2, 0.8, 0.3);
    let red = Color::srgb(0.8, 0.2, 0.2);
    for row in 0..6 {
        let y = -0.90 + row as f64 * 0.01;
        gizmos.line_gradient_2d(screen_pt(-SLIDER_HALF_WIDTH, y), screen_pt(SLIDER_HALF_WIDTH, y), green, red);
    }

    // knob
    let kx = slider_knob_x(scenario.world.pending_gravity_multiplier());
    for dx in [-0.005, 0.0, 0.005] {
        gizmos.line_2d(screen_pt(kx + dx, -0.93), screen_pt(kx + dx, -0.82), Color::WHITE);
    }
}
