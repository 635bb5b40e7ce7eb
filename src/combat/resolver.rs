use super::*;

pub const CHIP_DAMAGE: i32 = 1;
/// Decision ticks a knocked-down fighter lies on the floor.
pub const KNOCKDOWN_HOLD: u32 = 6;

/// How an attack lands on a standing defender.
struct Profile {
    damage: i32,
    reaction: Action,
    knockdown: bool,
}

const fn hit(damage: i32, reaction: Action) -> Option<Profile> {
    Some(Profile {
        damage,
        reaction,
        knockdown: false,
    })
}

const fn floor(damage: i32, reaction: Action) -> Option<Profile> {
    Some(Profile {
        damage,
        reaction,
        knockdown: true,
    })
}

fn profile(attack: Action) -> Option<Profile> {
    use Action::*;
    match attack {
        LowPunch => hit(5, TorsoHit),
        HighPunch => hit(7, HeadHit),
        LowKick => hit(8, TorsoHit),
        HighKick => hit(10, KickbackTorsoHit),
        CrouchKick => hit(6, TorsoHit),
        JumpPunch => hit(7, HeadHit),
        ForwardJumpPunch => hit(8, HeadHit),
        JumpLowKick => hit(9, HeadHit),
        JumpHighKick => hit(11, HeadHit),
        LowSweepKick => floor(10, Fall),
        HighSweepKick => floor(12, Fall),
        Uppercut => floor(14, UppercutHit),
        Special1 => floor(12, Fall),
        _ => None,
    }
}

/// Outcome of one attack against one defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Evaded: chip damage, the defender keeps its pose.
    Blocked,
    Hit {
        damage: i32,
        reaction: Action,
        knockdown: bool,
    },
    /// Not an attack at all.
    Ignored,
}

fn evades(attack: Action, defender: &PlayerState) -> bool {
    match defender.action {
        Action::CrouchBlock | Action::Getup => true,
        Action::Block => !matches!(attack, Action::LowSweepKick | Action::CrouchKick),
        _ => defender.laying,
    }
}

/// Decides what `attack` does to `defender` without touching anything.
pub fn judge(attack: Action, defender: &PlayerState) -> Verdict {
    let Some(profile) = profile(attack) else {
        return Verdict::Ignored;
    };
    if evades(attack, defender) {
        return Verdict::Blocked;
    }

    let (reaction, knockdown) = if defender.jumping {
        (Action::Fall, profile.knockdown)
    } else if profile.knockdown {
        (profile.reaction, true)
    } else if defender.crouching {
        (Action::CrouchHit, false)
    } else {
        (profile.reaction, false)
    };
    Verdict::Hit {
        damage: profile.damage,
        reaction,
        knockdown,
    }
}

impl Verdict {
    pub fn apply(self, defender: &mut PlayerState, health: &mut Health, character: &Character) {
        match self {
            Verdict::Blocked => {
                health.take_damage(CHIP_DAMAGE);
                defender.curr_frame = defender.curr_frame.saturating_sub(1);
            }
            Verdict::Hit {
                damage,
                reaction,
                knockdown,
            } => {
                health.take_damage(damage);
                if defender.jumping {
                    // floored on landing, see `move_fighters`
                    defender.force(reaction, character);
                    defender.jumping = true;
                    defender.laying = knockdown;
                } else if knockdown {
                    defender.knock_down(reaction, character, KNOCKDOWN_HOLD);
                } else {
                    defender.force(reaction, character);
                    defender.crouching = reaction == Action::CrouchHit;
                }
            }
            Verdict::Ignored => {}
        }
    }
}
