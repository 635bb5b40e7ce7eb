use super::*;
use crate::combat::{Attack, spawn_melee, spawn_projectile};

pub fn plugin(app: &mut App) {
    app.add_systems(
        SimTick,
        decide.run_if(decision_tick).in_set(SimSystems::Decide),
    );
}

/// Classifies each fighter's input, steps its state machine and spawns the
/// hitbox the spawn gate asks for.
fn decide(
    mut commands: Commands,
    mut fighters: Query<(Entity, &CharacterId, &Inputs, &Position, &mut PlayerState)>,
    attacks: Query<&Attack>,
) {
    for (entity, id, inputs, feet, mut state) in fighters.iter_mut() {
        let character = id.data();
        let before = state.action;
        let strike = state.step(classify(inputs, character), character);

        if state.action != before {
            debug!("{entity}: {before:?} -> {:?}", state.action);
        }

        let Some(strike) = strike else {
            continue;
        };
        if attacks
            .iter()
            .any(|a| a.attacker == entity && a.action == state.action)
        {
            debug!("{entity}: {:?} hitbox already out", state.action);
            continue;
        }
        match strike {
            Strike::Melee => {
                spawn_melee(&mut commands, entity, state.action, state.facing, **feet);
            }
            Strike::Projectile => {
                spawn_projectile(&mut commands, entity, *id, state.facing, **feet);
            }
        }
    }
}
