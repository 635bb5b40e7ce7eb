use bevy::prelude::*;
use serde::{Deserialize, Serialize};

mod config;
mod primitives;
mod states;

pub use config::*;
pub use primitives::*;
pub use states::*;

pub fn plugin(app: &mut App) {
    app.add_plugins((config::plugin, states::plugin, primitives::plugin));
}

/// Which side of the controls a fighter is bound to.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[reflect(Component)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        }
    }

    /// Player one starts on the left facing right, player two the opposite.
    pub fn default_facing(self) -> Facing {
        match self {
            PlayerId::One => Facing::Right,
            PlayerId::Two => Facing::Left,
        }
    }
}

#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// +1 when facing right, -1 when facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}
