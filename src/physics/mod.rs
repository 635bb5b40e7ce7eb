//! Overlap bridge: every fighter, hitbox and stage edge is a sensor box.
//!
//! A backend writes [`SensorContact`] messages in [`SimSystems::Sense`], this
//! module turns them into relation flags and [`HitEvent`]s. The avian2d
//! backend lives in [`avian`]; tests plug in their own.

use crate::combat::{Attack, HitEvent};
use crate::*;

pub mod avian;

pub fn plugin(app: &mut App) {
    app.register_type::<SensorBox>()
        .register_type::<Contacts>()
        .add_message::<SensorContact>()
        .add_systems(Startup, spawn_boundaries)
        .add_systems(SimTick, apply_contacts.in_set(SimSystems::Contacts));
}

/// Width of the stage-edge sensors.
pub const BOUNDARY_THICKNESS: f32 = 20.0;

/// Axis-aligned sensor shape, offset from the owner's [`Position`].
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct SensorBox {
    pub size: Vec2,
    pub offset: Vec2,
}

impl SensorBox {
    pub fn new(size: Vec2, offset: Vec2) -> Self {
        Self { size, offset }
    }

    /// Box centred on the position itself.
    pub fn centred(size: Vec2) -> Self {
        Self::new(size, Vec2::ZERO)
    }

    pub fn centre(&self, position: Vec2) -> Vec2 {
        position + self.offset
    }
}

/// Relation flags a fighter's sensor currently has.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Component)]
pub struct Contacts {
    pub touching_opponent: bool,
    pub at_left_boundary: bool,
    pub at_right_boundary: bool,
}

/// A pair of sensors started or stopped overlapping.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorContact {
    Started(Entity, Entity),
    Ended(Entity, Entity),
}

impl SensorContact {
    pub fn pair(&self) -> (Entity, Entity) {
        match *self {
            SensorContact::Started(a, b) | SensorContact::Ended(a, b) => (a, b),
        }
    }

    pub fn started(&self) -> bool {
        matches!(self, SensorContact::Started(..))
    }
}

fn spawn_boundaries(config: Res<MatchConfig>, mut commands: Commands) {
    let stage = config.stage;
    for (side, x) in [(Side::Left, 0.0), (Side::Right, stage.width)] {
        let position = Vec2::new(x, stage.floor + stage.height / 2.0);
        commands.spawn((
            Name::new(format!("{side:?} boundary")),
            Boundary,
            side,
            Position(position),
            SensorBox::centred(Vec2::new(BOUNDARY_THICKNESS, stage.height)),
            Transform::from_translation(position.extend(0.0)),
        ));
    }
}

fn apply_contacts(
    mut contacts: MessageReader<SensorContact>,
    mut fighters: Query<&mut Contacts, With<Fighter>>,
    sides: Query<&Side, With<Boundary>>,
    attacks: Query<&Attack>,
    mut commands: Commands,
) {
    for contact in contacts.read() {
        let (a, b) = contact.pair();
        let started = contact.started();

        for (this, other) in [(a, b), (b, a)] {
            let other_is_fighter = fighters.contains(other);
            let Ok(mut flags) = fighters.get_mut(this) else {
                continue;
            };

            if other_is_fighter {
                flags.touching_opponent = started;
            } else if let Ok(side) = sides.get(other) {
                match side {
                    Side::Left => flags.at_left_boundary = started,
                    Side::Right => flags.at_right_boundary = started,
                }
            } else if let Ok(attack) = attacks.get(other) {
                if started && attack.attacker != this {
                    commands.trigger(HitEvent {
                        attack: other,
                        defender: this,
                    });
                }
            }
        }
    }
}
