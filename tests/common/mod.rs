//! Headless match harness: the simulation plugin, a keyboard resource and an
//! exact AABB overlap backend standing in for avian2d.

#![allow(dead_code)]

use bevy::prelude::*;
use kombat::{
    MatchConfig, PlayerId, SimSystems, SimTick,
    combat::Health,
    fighter::PlayerState,
    input::{InputMask, KeyMap},
    physics::{SensorBox, SensorContact},
};
use std::collections::HashSet;

/// Every bit a player can hold down, one key each.
const CONTROLS: [InputMask; 9] = [
    InputMask::UP,
    InputMask::DOWN,
    InputMask::LEFT,
    InputMask::RIGHT,
    InputMask::LOW_PUNCH,
    InputMask::HIGH_PUNCH,
    InputMask::LOW_KICK,
    InputMask::HIGH_KICK,
    InputMask::BLOCK,
];

/// Sensor pairs overlapping after the previous pass.
#[derive(Resource, Default)]
struct Overlaps(HashSet<(Entity, Entity)>);

fn ordered(a: Entity, b: Entity) -> (Entity, Entity) {
    if a < b { (a, b) } else { (b, a) }
}

fn sense_overlaps(
    mut overlaps: ResMut<Overlaps>,
    bodies: Query<(Entity, &SensorBox, &Transform)>,
    mut contacts: MessageWriter<SensorContact>,
) {
    let rects: Vec<(Entity, Rect)> = bodies
        .iter()
        .map(|(entity, sensor, transform)| {
            let rect = Rect::from_center_size(transform.translation.truncate(), sensor.size);
            (entity, rect)
        })
        .collect();

    let mut now = HashSet::new();
    for (i, (a, rect_a)) in rects.iter().enumerate() {
        for (b, rect_b) in &rects[i + 1..] {
            if !rect_a.intersect(*rect_b).is_empty() {
                now.insert(ordered(*a, *b));
            }
        }
    }

    for &(a, b) in now.difference(&overlaps.0) {
        contacts.write(SensorContact::Started(a, b));
    }
    for &(a, b) in overlaps.0.difference(&now) {
        contacts.write(SensorContact::Ended(a, b));
    }
    overlaps.0 = now;
}

pub struct Match {
    pub app: App,
}

impl Match {
    /// Both fighters close enough for a standing punch to connect.
    pub fn close_quarters() -> Self {
        let mut config = MatchConfig::default().every_tick();
        config.players[0].start_x = 300.0;
        config.players[1].start_x = 400.0;
        Self::new(config)
    }

    pub fn new(config: MatchConfig) -> Self {
        let mut app = App::new();
        app.insert_resource(config)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Overlaps>()
            .add_plugins(kombat::SimulationPlugin)
            .add_systems(SimTick, sense_overlaps.in_set(SimSystems::Sense));
        app.world_mut().run_schedule(Startup);
        Self { app }
    }

    pub fn tick(&mut self) {
        self.app.world_mut().run_schedule(SimTick);
    }

    pub fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    fn keymap(&self, id: PlayerId) -> KeyMap {
        self.app.world().resource::<MatchConfig>().player(id).keys.clone()
    }

    /// Holds exactly `controls` for `id`, releasing that player's other keys.
    pub fn hold(&mut self, id: PlayerId, controls: InputMask) {
        let map = self.keymap(id);
        let mut keys = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        for bit in CONTROLS {
            let Some(key) = map.key_for(bit) else { continue };
            if controls.contains(bit) {
                keys.press(key);
            } else {
                keys.release(key);
            }
        }
    }

    pub fn release(&mut self, id: PlayerId) {
        self.hold(id, InputMask::empty());
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn fighter(&mut self, id: PlayerId) -> Entity {
        let world = self.app.world_mut();
        let mut query = world.query::<(Entity, &PlayerId, &PlayerState)>();
        query
            .iter(world)
            .find_map(|(entity, player, _)| (*player == id).then_some(entity))
            .expect("fighter spawned at startup")
    }

    pub fn state(&mut self, id: PlayerId) -> PlayerState {
        let entity = self.fighter(id);
        self.app.world().get::<PlayerState>(entity).cloned().expect("fighter state")
    }

    pub fn health(&mut self, id: PlayerId) -> i32 {
        let entity = self.fighter(id);
        self.app.world().get::<Health>(entity).expect("fighter health").current
    }

    pub fn count<C: Component>(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query_filtered::<Entity, With<C>>().iter(world).count()
    }

    pub fn entities<C: Component>(&mut self) -> Vec<Entity> {
        let world = self.app.world_mut();
        world.query_filtered::<Entity, With<C>>().iter(world).collect()
    }
}
