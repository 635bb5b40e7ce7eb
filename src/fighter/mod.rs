//! Fighters: roster data, intent classification, the per-fighter state
//! machine and its movement rules.

use crate::combat::Health;
use crate::input::Inputs;
use crate::physics::{Contacts, SensorBox};
use crate::*;
use serde::{Deserialize, Serialize};

mod actions;
mod animation;
mod control;
mod intent;
mod movement;
mod roster;
mod state;

pub use actions::*;
pub use animation::*;
pub use intent::*;
pub use movement::*;
pub use roster::*;
pub use state::*;

pub fn plugin(app: &mut App) {
    app.register_type::<PlayerState>()
        .register_type::<CharacterId>()
        .register_type::<SpriteFrame>()
        .add_systems(Startup, spawn_fighters)
        .add_plugins((control::plugin, movement::plugin, animation::plugin));
}

/// Fighter hitbox, centred above the feet.
pub const FIGHTER_BOX: Vec2 = Vec2::new(60.0, 150.0);

pub fn spawn_fighters(config: Res<MatchConfig>, mut commands: Commands) {
    for id in [PlayerId::One, PlayerId::Two] {
        let setup = config.player(id);
        let character = setup.character.data();
        let feet = Vec2::new(setup.start_x, config.stage.floor);
        let sensor = SensorBox::new(FIGHTER_BOX, Vec2::new(0.0, FIGHTER_BOX.y / 2.0));

        commands.spawn((
            Name::new(format!("{} ({})", id.as_str(), character.name)),
            Fighter,
            id,
            setup.character,
            (setup.keys.clone(), Inputs::default()),
            PlayerState::new(id.default_facing(), character),
            Health::new(config.health),
            (Position(feet), Velocity::default()),
            Transform::from_translation(sensor.centre(feet).extend(1.0)),
            sensor,
            Contacts::default(),
            SpriteFrame::fighter(setup.character),
        ));
    }
}
