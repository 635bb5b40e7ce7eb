//! Keyboard snapshot → per-player input rings.

use crate::fighter::PlayerState;
use crate::*;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

mod keymap;
mod mask;

pub use keymap::*;
pub use mask::*;

pub fn plugin(app: &mut App) {
    app.register_type::<KeyMap>().add_systems(
        SimTick,
        (
            exit_on_escape,
            sample_inputs.run_if(input_tick),
        )
            .chain()
            .in_set(SimSystems::Input),
    );
}

/// The escape key ends the process before any fighter is touched.
fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.pressed(KeyCode::Escape) {
        info!("escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}

fn sample_inputs(
    keys: Res<ButtonInput<KeyCode>>,
    mut fighters: Query<(&KeyMap, &PlayerState, &mut Inputs)>,
) {
    for (map, state, mut inputs) in fighters.iter_mut() {
        let mut mask = map.sample(&keys);
        mask.set(InputMask::FACING_RIGHT, state.facing == Facing::Right);
        mask.set(InputMask::AIRBORNE, state.jumping);
        inputs.push(mask);
    }
}
