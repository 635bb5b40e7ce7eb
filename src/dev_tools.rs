//! Development tools for the binary. Only compiled with the `dev` feature.

use bevy::{color::palettes::css, input::common_conditions::input_just_pressed, prelude::*};
use kombat::{
    Boundary, Fighter,
    combat::Attack,
    physics::{Contacts, SensorBox},
};

pub fn plugin(app: &mut App) {
    app.init_resource::<ShowSensors>()
        .add_systems(
            Update,
            (
                f1_trigger_system.run_if(input_just_pressed(KeyCode::F1)),
                draw_sensors.run_if(|show: Res<ShowSensors>| show.0),
            ),
        )
        .add_observer(toggle_sensors);
}

#[derive(Resource, Default)]
struct ShowSensors(bool);

#[derive(Event)]
struct ToggleSensors;

fn f1_trigger_system(mut commands: Commands) {
    commands.trigger(ToggleSensors);
}

fn toggle_sensors(_: On<ToggleSensors>, mut show: ResMut<ShowSensors>) {
    show.0 = !show.0;
    info!("sensor outlines {}", if show.0 { "on" } else { "off" });
}

/// Outlines every sensor box where the overlap backend sees it.
fn draw_sensors(
    mut gizmos: Gizmos,
    bodies: Query<(
        &SensorBox,
        &Transform,
        Option<&Contacts>,
        Has<Fighter>,
        Has<Attack>,
        Has<Boundary>,
    )>,
) {
    for (sensor, transform, contacts, fighter, attack, boundary) in bodies.iter() {
        let color = match (fighter, attack, boundary) {
            (true, ..) if contacts.is_some_and(|c| c.touching_opponent) => css::ORANGE,
            (true, ..) => css::LIME,
            (_, true, _) => css::RED,
            (.., true) => css::GRAY,
            _ => css::WHITE,
        };
        gizmos.rect_2d(transform.translation.truncate(), sensor.size, color);
    }
}
