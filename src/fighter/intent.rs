use super::*;
use crate::input::{InputMask, Inputs};

/// Frame-hold window: the action pins at `frame` for `hold` extra decision
/// ticks, and each tick the same intent arrives again extends it.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freeze {
    pub frame: u8,
    pub hold: u32,
}

/// What the controls ask for this decision tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub action: Action,
    pub crouching: bool,
    /// Spawns a hitbox.
    pub attack: bool,
    /// Spawns a projectile instead of a melee hitbox.
    pub special: bool,
    /// Runs to completion before accepting new input.
    pub busy: bool,
    pub jumping: bool,
    pub freeze: Option<Freeze>,
}

impl Intent {
    pub const fn idle(action: Action) -> Self {
        Self {
            action,
            crouching: false,
            attack: false,
            special: false,
            busy: false,
            jumping: false,
            freeze: None,
        }
    }

    pub const fn busy(action: Action) -> Self {
        Self {
            busy: true,
            ..Self::idle(action)
        }
    }

    pub const fn attack(action: Action) -> Self {
        Self {
            attack: true,
            ..Self::busy(action)
        }
    }

    pub const fn special(action: Action) -> Self {
        Self {
            special: true,
            ..Self::attack(action)
        }
    }

    pub const fn crouched(self) -> Self {
        Self {
            crouching: true,
            ..self
        }
    }

    pub const fn airborne(self) -> Self {
        Self {
            jumping: true,
            ..self
        }
    }

    pub const fn held_at(self, frame: u8, hold: u32) -> Self {
        Self {
            freeze: Some(Freeze { frame, hold }),
            ..self
        }
    }
}

/// How a rule's mask is compared to the newest sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Match {
    /// Normalized keys equal the mask.
    Exact,
    /// Normalized keys include every bit of the mask.
    Holds,
}

/// One row of the priority table.
struct Rule {
    mask: InputMask,
    matching: Match,
    /// Applies only while airborne, or only on the ground.
    airborne: bool,
    intent: Intent,
}

const fn ground(mask: InputMask, intent: Intent) -> Rule {
    Rule {
        mask,
        matching: Match::Exact,
        airborne: false,
        intent,
    }
}

const fn air(mask: InputMask, intent: Intent) -> Rule {
    Rule {
        mask,
        matching: Match::Holds,
        airborne: true,
        intent,
    }
}

const UP: InputMask = InputMask::UP;
const DOWN: InputMask = InputMask::DOWN;
const FWD: InputMask = InputMask::FORWARD;
const BACK: InputMask = InputMask::BACK;
const LP: InputMask = InputMask::LOW_PUNCH;
const HP: InputMask = InputMask::HIGH_PUNCH;
const LK: InputMask = InputMask::LOW_KICK;
const HK: InputMask = InputMask::HIGH_KICK;
const BLOCK: InputMask = InputMask::BLOCK;

/// Earlier rows win. Special moves are checked before this table.
const RULES: &[Rule] = &[
    // jump attacks
    air(FWD.union(LP), Intent::attack(Action::ForwardJumpPunch).airborne()),
    air(FWD.union(HP), Intent::attack(Action::ForwardJumpPunch).airborne()),
    air(LP, Intent::attack(Action::JumpPunch).airborne()),
    air(HP, Intent::attack(Action::JumpPunch).airborne()),
    air(LK, Intent::attack(Action::JumpLowKick).airborne()),
    air(HK, Intent::attack(Action::JumpHighKick).airborne()),
    // block
    ground(DOWN.union(BLOCK), Intent::idle(Action::CrouchBlock).crouched().held_at(2, 1)),
    ground(BLOCK, Intent::idle(Action::Block).held_at(2, 1)),
    // crouch kick
    ground(DOWN.union(LK), Intent::attack(Action::CrouchKick).crouched()),
    ground(DOWN.union(HK), Intent::attack(Action::CrouchKick).crouched()),
    // jumps
    ground(UP, Intent::busy(Action::Jump).airborne()),
    ground(UP.union(FWD), Intent::busy(Action::Roll).airborne()),
    ground(UP.union(BACK), Intent::busy(Action::JumpBack).airborne()),
    // sweeps
    ground(BACK.union(LK), Intent::attack(Action::LowSweepKick)),
    ground(BACK.union(HK), Intent::attack(Action::HighSweepKick)),
    // uppercut before plain crouch
    ground(DOWN.union(HP), Intent::attack(Action::Uppercut).crouched()),
    ground(DOWN, Intent::idle(Action::Crouch).crouched().held_at(2, 1)),
    // punches and kicks
    ground(LP, Intent::attack(Action::LowPunch)),
    ground(HP, Intent::attack(Action::HighPunch)),
    ground(LK, Intent::attack(Action::LowKick)),
    ground(HK, Intent::attack(Action::HighKick)),
    // walking
    ground(FWD, Intent::idle(Action::WalkForward)),
    ground(BACK, Intent::idle(Action::WalkBackward)),
];

impl Rule {
    fn matches(&self, keys: InputMask, airborne: bool) -> bool {
        if self.airborne != airborne {
            return false;
        }
        match self.matching {
            Match::Exact => keys == self.mask,
            Match::Holds => keys.contains(self.mask),
        }
    }
}

/// Maps the input ring to an intent. Never fails: no match means stance.
pub fn classify(inputs: &Inputs, character: &Character) -> Intent {
    let latest = inputs.latest();
    if let Some(special) = character
        .specials
        .iter()
        .filter(|_| !latest.airborne())
        .find(|s| inputs.matches_sequence(&s.sequence))
    {
        debug!("{} special: {}", character.name, special.name);
        return Intent::special(special.action);
    }

    let keys = latest.normalized();
    RULES
        .iter()
        .find(|rule| rule.matches(keys, latest.airborne()))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::idle(Action::Stance))
}
