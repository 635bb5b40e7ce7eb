//! Attacks: hitbox entities, their lifecycle and how they land.

use crate::fighter::{Action, Character, CharacterId, PlayerState};
use crate::*;

mod components;
mod lifecycle;
mod resolver;
mod systems;

pub use components::*;
pub use lifecycle::*;
pub use resolver::*;

pub fn plugin(app: &mut App) {
    app.add_plugins((components::plugin, lifecycle::plugin, systems::plugin));
}
