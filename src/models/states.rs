use super::*;
use crate::{SimSystems, SimTick};

pub fn plugin(app: &mut App) {
    app.init_resource::<SimClock>()
        .add_systems(SimTick, tick_clock.in_set(SimSystems::Clock));
}

/// Monotonic simulation tick counter. The first tick is 1.
#[derive(Resource, Reflect, Debug, Clone, Default)]
#[reflect(Resource)]
pub struct SimClock {
    pub tick: u64,
}

impl SimClock {
    /// True on ticks that land on the given divider. Dividers of 0 or 1 fire
    /// every tick.
    pub fn every(&self, divider: u32) -> bool {
        divider <= 1 || self.tick % u64::from(divider) == 0
    }
}

fn tick_clock(mut clock: ResMut<SimClock>) {
    clock.tick += 1;
}

/// Run condition: this tick samples input.
pub fn input_tick(clock: Res<SimClock>, config: Res<MatchConfig>) -> bool {
    clock.every(config.cadence.input_every)
}

/// Run condition: this tick runs the state machines.
pub fn decision_tick(clock: Res<SimClock>, config: Res<MatchConfig>) -> bool {
    clock.every(config.cadence.decide_every)
}
