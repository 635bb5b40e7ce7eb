//! avian2d as the overlap backend: zero gravity, sensor-only bodies.

use super::*;
use avian2d::prelude::{
    Collider, CollisionEnd, CollisionEventsEnabled, CollisionStart, Gravity, PhysicsPlugins,
    RigidBody, Sensor,
};

pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::ZERO))
        .add_observer(attach_body)
        .add_systems(
            SimTick,
            (resize_bodies, forward_collisions).in_set(SimSystems::Sense),
        );
}

/// Every new sensor box gets a body. Stage edges never move.
fn attach_body(on: On<Add, SensorBox>, boxes: Query<(&SensorBox, Has<Boundary>)>, mut commands: Commands) {
    let Ok((sensor, is_boundary)) = boxes.get(on.entity) else {
        return;
    };
    let body = if is_boundary {
        RigidBody::Static
    } else {
        RigidBody::Kinematic
    };
    commands.entity(on.entity).insert((
        body,
        Collider::rectangle(sensor.size.x, sensor.size.y),
        Sensor,
        CollisionEventsEnabled,
    ));
}

/// Projectiles grow into explosions in place.
fn resize_bodies(boxes: Query<(Entity, Ref<SensorBox>), Changed<SensorBox>>, mut commands: Commands) {
    for (entity, sensor) in boxes.iter() {
        if sensor.is_added() {
            continue;
        }
        commands
            .entity(entity)
            .insert(Collider::rectangle(sensor.size.x, sensor.size.y));
    }
}

fn forward_collisions(
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    mut contacts: MessageWriter<SensorContact>,
) {
    for event in started.read() {
        contacts.write(SensorContact::Started(event.collider1, event.collider2));
    }
    for event in ended.read() {
        contacts.write(SensorContact::Ended(event.collider1, event.collider2));
    }
}
