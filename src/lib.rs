//! Simulation core of a two-player 2D fighting game.
//!
//! Everything runs inside the [`SimTick`] schedule. The binary drives it from
//! [`FixedUpdate`]; tests run it by hand with `world.run_schedule(SimTick)`.

use bevy::{ecs::schedule::ScheduleLabel, prelude::*};

pub mod combat;
pub mod duel;
pub mod fighter;
pub mod input;
pub mod models;
pub mod physics;

pub use models::*;

/// One simulation step. Input sampling and action decisions run on their own
/// dividers of the tick counter, everything else runs every tick.
#[derive(ScheduleLabel, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimTick;

/// Ordered passes of a tick. When adding a new variant, make sure to order it
/// in the `configure_sets` call below.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum SimSystems {
    /// Advance the tick counter.
    Clock,
    /// Sample the keyboard into the input rings.
    Input,
    /// Run the per-fighter state machines and spawn attack hitboxes.
    Decide,
    /// Collect overlap begin/end pairs from whatever backend is installed.
    Sense,
    /// Turn overlaps into relation flags and hits.
    Contacts,
    /// Integrate velocities and sync body transforms.
    Move,
    /// Age and detonate transient attack entities.
    Lifecycle,
    /// Pair-wide facing and knockout.
    Duel,
    /// Pick sprite frames for the renderer.
    Present,
}

/// Headless simulation. Physics and rendering are separate plugins, see
/// [`physics::avian`] and the binary.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_schedule(SimTick);
        app.configure_sets(
            SimTick,
            (
                SimSystems::Clock,
                SimSystems::Input,
                SimSystems::Decide,
                SimSystems::Sense,
                SimSystems::Contacts,
                SimSystems::Move,
                SimSystems::Lifecycle,
                SimSystems::Duel,
                SimSystems::Present,
            )
                .chain(),
        );

        app.add_plugins((
            models::plugin,
            input::plugin,
            fighter::plugin,
            combat::plugin,
            physics::plugin,
            duel::plugin,
        ))
        .add_systems(FixedUpdate, run_sim_tick);
    }
}

fn run_sim_tick(world: &mut World) {
    world.run_schedule(SimTick);
}
