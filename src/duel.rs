//! Rules that look at both fighters at once: facing and the knockout.

use crate::combat::Health;
use crate::fighter::{Action, CharacterId, PlayerState};
use crate::*;

pub fn plugin(app: &mut App) {
    app.register_type::<MatchOutcome>()
        .register_type::<RoundScore>()
        .init_resource::<MatchOutcome>()
        .init_resource::<RoundScore>()
        .add_systems(
            SimTick,
            (face_each_other, knock_out)
                .chain()
                .in_set(SimSystems::Duel),
        );
}

/// Winner of the running match, once there is one.
#[derive(Resource, Reflect, Debug, Clone, Default)]
#[reflect(Resource)]
pub struct MatchOutcome {
    pub winner: Option<PlayerId>,
}

impl MatchOutcome {
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}

#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct RoundScore {
    pub round: u32,
    pub wins: [u32; 2],
}

impl Default for RoundScore {
    fn default() -> Self {
        Self {
            round: 1,
            wins: [0, 0],
        }
    }
}

/// Announces the winner. The renderer draws it as text.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct WinBanner {
    pub winner: PlayerId,
}

impl WinBanner {
    pub fn text(&self) -> String {
        format!("{} wins", self.winner.as_str())
    }
}

fn facing_towards(me: f32, other: f32, current: Facing) -> Facing {
    if me > other {
        Facing::Left
    } else if me < other {
        Facing::Right
    } else {
        current
    }
}

/// Turns both fighters towards each other, only while both are settled.
fn face_each_other(
    mut fighters: Query<(&CharacterId, &Position, &mut PlayerState), With<Fighter>>,
) {
    let mut pairs = fighters.iter_combinations_mut();
    while let Some([(a_id, a_pos, mut a), (b_id, b_pos, mut b)]) = pairs.fetch_next() {
        if a.jumping || b.jumping || a.busy || b.busy {
            continue;
        }
        let a_wants = facing_towards(a_pos.x, b_pos.x, a.facing);
        let b_wants = facing_towards(b_pos.x, a_pos.x, b.facing);
        if a.facing != a_wants {
            a.turn(a_wants, a_id.data());
        }
        if b.facing != b_wants {
            b.turn(b_wants, b_id.data());
        }
    }
}

/// One-shot: the fighter out of health falls, the other celebrates, both
/// pinned for good. Waits for both to be on the ground.
fn knock_out(
    mut commands: Commands,
    mut outcome: ResMut<MatchOutcome>,
    mut score: ResMut<RoundScore>,
    mut fighters: Query<(&PlayerId, &CharacterId, &Health, &mut PlayerState), With<Fighter>>,
) {
    if outcome.is_decided() {
        return;
    }
    let mut pairs = fighters.iter_combinations_mut();
    while let Some([a, b]) = pairs.fetch_next() {
        let (loser, winner) = if a.2.is_out() {
            (a, b)
        } else if b.2.is_out() {
            (b, a)
        } else {
            continue;
        };
        let (_, loser_character, _, mut loser_state) = loser;
        let (&winner_id, winner_character, _, mut winner_state) = winner;
        if loser_state.jumping || winner_state.jumping {
            continue;
        }

        loser_state.pin(Action::GiddyFall, loser_character.data(), u32::MAX);
        winner_state.pin(Action::Win, winner_character.data(), u32::MAX);
        outcome.winner = Some(winner_id);
        score.wins[winner_id.index()] += 1;

        let banner = WinBanner { winner: winner_id };
        info!("round {}: {}", score.round, banner.text());
        commands.spawn((Name::new("Win banner"), banner));
        return;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_follows_relative_position() {
        assert_eq!(facing_towards(500.0, 200.0, Facing::Right), Facing::Left);
        assert_eq!(facing_towards(200.0, 500.0, Facing::Left), Facing::Right);
        assert_eq!(facing_towards(300.0, 300.0, Facing::Left), Facing::Left);
    }
}
