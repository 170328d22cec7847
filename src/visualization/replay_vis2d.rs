use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::run::Trajectory;
use crate::simulation::states::N_BODIES;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Recorded XY paths being replayed, plus the playback cursor
#[derive(Resource)]
struct Replay {
    paths: [Vec<Vec2>; N_BODIES],
    cursor: usize,
    per_frame: usize, // snapshots advanced per frame
}

const SCALE: f32 = 200.0;
const BODY_RADIUS: f32 = 6.0;
const COLORS: [(f32, f32, f32); N_BODIES] = [(1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.0, 0.4, 1.0)];

/// Replay a finished trajectory in a Bevy window, XY plane, with trails
pub fn run_replay_2d(trajectory: &Trajectory, per_frame: usize) {
    println!("run_replay_2d: replaying {} snapshots", trajectory.len());

    let paths = std::array::from_fn(|i| {
        trajectory
            .body_xy(i)
            .into_iter()
            .map(|(x, y)| Vec2::new(x as f32, y as f32) * SCALE)
            .collect()
    });

    App::new()
        .insert_resource(Replay { paths, cursor: 0, per_frame: per_frame.max(1) })
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (advance_cursor_system, sync_transforms_system, draw_trails_system))
        .run();
}

fn body_color(i: usize) -> Color {
    let (r, g, b) = COLORS[i];
    Color::srgb(r, g, b)
}

fn setup_bodies_system(mut commands: Commands, replay: Res<Replay>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    for (i, path) in replay.paths.iter().enumerate() {
        let start = path.first().copied().unwrap_or(Vec2::ZERO);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(BODY_RADIUS))),
                material: materials.add(ColorMaterial::from(body_color(i))),
                transform: Transform::from_xyz(start.x, start.y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn advance_cursor_system(mut replay: ResMut<Replay>) {
    let last = replay.paths[0].len().saturating_sub(1);
    replay.cursor = (replay.cursor + replay.per_frame).min(last);
}

fn sync_transforms_system(replay: Res<Replay>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(p) = replay.paths[*i].get(replay.cursor) {
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }
}

fn draw_trails_system(replay: Res<Replay>, mut gizmos: Gizmos) {
    for (i, path) in replay.paths.iter().enumerate() {
        let end = (replay.cursor + 1).min(path.len());
        gizmos.linestrip_2d(path[..end].iter().copied(), body_color(i));
    }
}
