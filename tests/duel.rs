mod common;

use common::Match;
use kombat::{
    PlayerId,
    duel::{MatchOutcome, RoundScore, WinBanner},
    fighter::{Action, SUB_ZERO},
    input::InputMask,
};

const LP: InputMask = InputMask::LOW_PUNCH;

/// Holds `controls` for the length of `action`, then lets go.
fn perform(duel: &mut Match, id: PlayerId, controls: InputMask, action: Action) {
    duel.hold(id, controls);
    duel.ticks(SUB_ZERO.frames(action) as usize);
    duel.release(id);
}

#[test]
fn low_punch_lands_exactly_once() {
    let mut duel = Match::close_quarters();

    duel.hold(PlayerId::One, LP);
    duel.ticks(2);
    assert_eq!(duel.state(PlayerId::One).action, Action::LowPunch);
    assert_eq!(duel.health(PlayerId::Two), 95);
    assert_eq!(duel.state(PlayerId::Two).action, Action::TorsoHit);

    duel.ticks(3);
    duel.release(PlayerId::One);
    for _ in 0..30 {
        duel.tick();
        assert_ne!(duel.state(PlayerId::Two).action, Action::CrouchHit);
    }
    assert_eq!(duel.health(PlayerId::Two), 95);
    assert_eq!(duel.health(PlayerId::One), 100);
    assert_eq!(duel.state(PlayerId::Two).action, Action::Stance);
}

#[test]
fn crouch_block_only_chips() {
    let mut duel = Match::close_quarters();

    duel.hold(PlayerId::Two, InputMask::DOWN | InputMask::BLOCK);
    perform(&mut duel, PlayerId::One, LP, Action::LowPunch);
    duel.ticks(10);

    assert_eq!(duel.health(PlayerId::Two), 99);
    let defender = duel.state(PlayerId::Two);
    assert_eq!(defender.action, Action::CrouchBlock);
    assert!(defender.crouching);
}

#[test]
fn knockdown_gets_up_before_anything_else() {
    let mut duel = Match::close_quarters();

    duel.hold(PlayerId::One, InputMask::DOWN | InputMask::HIGH_PUNCH);
    duel.ticks(2);
    duel.hold(PlayerId::Two, InputMask::BLOCK);
    duel.ticks(3);
    duel.release(PlayerId::One);

    assert_eq!(duel.health(PlayerId::Two), 86);
    assert_eq!(duel.state(PlayerId::Two).action, Action::UppercutHit);

    let mut floored = 0;
    while duel.state(PlayerId::Two).action == Action::UppercutHit {
        assert!(duel.state(PlayerId::Two).laying);
        floored += 1;
        assert!(floored < 30, "never got up");
        duel.tick();
    }
    let after = duel.state(PlayerId::Two);
    assert_eq!(after.action, Action::Getup);
    assert!(!after.laying);
}

#[test]
fn knockout_pins_both_fighters() {
    let mut config = kombat::MatchConfig::default().every_tick();
    config.players[0].start_x = 300.0;
    config.players[1].start_x = 400.0;
    config.health = 5;
    let mut duel = Match::new(config);

    duel.hold(PlayerId::One, LP);
    duel.ticks(2);

    let outcome = duel.app.world().resource::<MatchOutcome>().clone();
    assert_eq!(outcome.winner, Some(PlayerId::One));
    assert_eq!(duel.app.world().resource::<RoundScore>().wins, [1, 0]);
    assert_eq!(duel.count::<WinBanner>(), 1);

    let loser = duel.state(PlayerId::Two);
    let winner = duel.state(PlayerId::One);
    assert_eq!(loser.action, Action::GiddyFall);
    assert_eq!(winner.action, Action::Win);

    // keys keep coming in, nothing moves
    duel.hold(PlayerId::Two, InputMask::UP | InputMask::HIGH_KICK);
    for _ in 0..60 {
        duel.tick();
        let down = duel.state(PlayerId::Two);
        assert_eq!(down.action, Action::GiddyFall);
        assert_eq!(down.curr_frame, loser.curr_frame);
        assert!(down.is_pinned());
        assert_eq!(duel.state(PlayerId::One).action, Action::Win);
        assert_eq!(duel.state(PlayerId::One).curr_frame, winner.curr_frame);
    }
    assert_eq!(duel.health(PlayerId::One), 5);
    assert_eq!(duel.count::<WinBanner>(), 1);
}

#[test]
fn escape_requests_exit() {
    let mut duel = Match::close_quarters();
    duel.tick();
    assert!(duel.app.should_exit().is_none());

    duel.press_key(bevy::prelude::KeyCode::Escape);
    duel.tick();
    assert!(duel.app.should_exit().is_some());
}

#[test]
fn frames_stay_in_range_under_mashing() {
    // default cadence: input every 2 ticks, decisions every 4
    let mut config = kombat::MatchConfig::default();
    config.players[0].start_x = 320.0;
    config.players[1].start_x = 420.0;
    let mut duel = Match::new(config);

    let one = [
        InputMask::RIGHT,
        LP,
        InputMask::DOWN | InputMask::HIGH_PUNCH,
        InputMask::UP,
        InputMask::LEFT | InputMask::LOW_KICK,
        InputMask::HIGH_KICK,
        InputMask::empty(),
    ];
    let two = [
        InputMask::BLOCK,
        InputMask::UP | InputMask::LEFT,
        InputMask::DOWN,
        InputMask::LOW_KICK,
        InputMask::DOWN | InputMask::BLOCK,
    ];

    let mut last_health = [100, 100];
    for step in 0..1200 {
        duel.hold(PlayerId::One, one[(step / 9) % one.len()]);
        duel.hold(PlayerId::Two, two[(step / 13) % two.len()]);
        duel.tick();

        for (i, id) in [PlayerId::One, PlayerId::Two].into_iter().enumerate() {
            let state = duel.state(id);
            assert!(
                state.curr_frame < state.busy_frames,
                "{id:?} in {:?} at frame {} of {}",
                state.action,
                state.curr_frame,
                state.busy_frames
            );
            let health = duel.health(id);
            assert!(health <= last_health[i]);
            last_health[i] = health;
        }
    }
}
