use super::*;
use crate::combat::{Attack, KNOCKDOWN_HOLD};

pub const WALK_FORWARD_SPEED: f32 = 4.0;
pub const WALK_BACKWARD_SPEED: f32 = 3.0;
pub const KNOCKBACK_SPEED: f32 = 6.0;
pub const JUMP_LAUNCH_SPEED: f32 = 16.0;
/// Horizontal drift of rolls and back jumps.
pub const JUMP_DRIFT_SPEED: f32 = 5.0;
pub const GRAVITY: f32 = 1.0;
/// How far a crouching fighter's hitbox sinks.
pub const CROUCH_DROP: f32 = 40.0;

pub fn plugin(app: &mut App) {
    app.add_systems(
        SimTick,
        (move_fighters, move_attacks, sync_bodies)
            .chain()
            .in_set(SimSystems::Move),
    );
}

/// Velocity of a grounded fighter in its current action.
fn ground_velocity(state: &PlayerState, contacts: &Contacts) -> Vec2 {
    let forward = state.facing.sign();
    match state.action {
        Action::WalkForward if !contacts.touching_opponent => {
            Vec2::new(forward * WALK_FORWARD_SPEED, 0.0)
        }
        Action::WalkBackward => Vec2::new(-forward * WALK_BACKWARD_SPEED, 0.0),
        Action::KickbackTorsoHit => Vec2::new(-forward * KNOCKBACK_SPEED, 0.0),
        _ => Vec2::ZERO,
    }
}

fn launch_velocity(state: &PlayerState) -> Option<Vec2> {
    let forward = state.facing.sign();
    let drift = match state.action {
        Action::Jump => 0.0,
        Action::Roll => forward * JUMP_DRIFT_SPEED,
        Action::JumpBack => -forward * JUMP_DRIFT_SPEED,
        _ => return None,
    };
    Some(Vec2::new(drift, JUMP_LAUNCH_SPEED))
}

fn move_fighters(
    config: Res<MatchConfig>,
    mut fighters: Query<
        (
            &CharacterId,
            &Contacts,
            &mut PlayerState,
            &mut Velocity,
            &mut Position,
        ),
        With<Fighter>,
    >,
) {
    let floor = config.stage.floor;
    for (id, contacts, mut state, mut velocity, mut position) in fighters.iter_mut() {
        if state.jumping {
            let grounded = position.y <= floor && velocity.y <= 0.0;
            match launch_velocity(&state).filter(|_| grounded) {
                Some(launch) => **velocity = launch,
                None => velocity.y -= GRAVITY,
            }
        } else {
            **velocity = ground_velocity(&state, contacts);
        }

        if (velocity.x < 0.0 && contacts.at_left_boundary)
            || (velocity.x > 0.0 && contacts.at_right_boundary)
        {
            velocity.x = 0.0;
        }

        **position += **velocity;

        if state.jumping && position.y <= floor && velocity.y < 0.0 {
            position.y = floor;
            **velocity = Vec2::ZERO;
            if state.laying {
                let fall = state.action;
                state.knock_down(fall, id.data(), KNOCKDOWN_HOLD);
            } else {
                state.force(Action::Landing, id.data());
            }
        }
    }
}

fn move_attacks(mut attacks: Query<(&Velocity, &mut Position), (With<Attack>, Without<Fighter>)>) {
    for (velocity, mut position) in attacks.iter_mut() {
        **position += **velocity;
    }
}

/// Writes every sensor body's transform from its position.
pub fn sync_bodies(mut bodies: Query<(&Position, &SensorBox, Option<&PlayerState>, &mut Transform)>) {
    for (position, sensor, state, mut transform) in bodies.iter_mut() {
        let mut centre = sensor.centre(**position);
        if state.is_some_and(|s| s.crouching) {
            centre.y -= CROUCH_DROP;
        }
        transform.translation = centre.extend(transform.translation.z);
    }
}
