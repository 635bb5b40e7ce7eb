use super::*;

/// Everything a fighter can be doing. Each variant has its own row of sprite
/// frames and a per-character frame count.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[default]
    Stance,
    WalkForward,
    WalkBackward,
    // standing attacks
    LowPunch,
    HighPunch,
    LowKick,
    HighKick,
    LowSweepKick,
    HighSweepKick,
    // crouching
    Crouch,
    CrouchKick,
    Uppercut,
    CrouchBlock,
    // airborne
    Jump,
    JumpBack,
    Roll,
    JumpPunch,
    ForwardJumpPunch,
    JumpLowKick,
    JumpHighKick,
    Landing,
    // reactions
    TorsoHit,
    HeadHit,
    KickbackTorsoHit,
    CrouchHit,
    Fall,
    UppercutHit,
    Getup,
    // misc
    Block,
    TurnLeftToRight,
    TurnRightToLeft,
    Special1,
    GiddyFall,
    Win,
}

impl Action {
    /// Sprite-sheet cell as (row, column).
    pub fn sheet_cell(self) -> (u32, u32) {
        use Action::*;
        match self {
            Stance => (0, 0),
            WalkForward | WalkBackward => (0, 1),
            HighPunch => (1, 0),
            LowPunch => (2, 0),
            LowKick => (3, 0),
            LowSweepKick => (3, 1),
            HighKick => (4, 0),
            HighSweepKick => (4, 1),
            Crouch => (5, 0),
            Uppercut => (5, 1),
            CrouchKick => (5, 2),
            Jump => (6, 0),
            JumpPunch => (6, 1),
            JumpHighKick => (6, 2),
            Landing => (6, 3),
            JumpBack => (7, 0),
            Roll => (7, 1),
            ForwardJumpPunch => (7, 2),
            JumpLowKick => (7, 3),
            TorsoHit => (8, 0),
            HeadHit => (8, 1),
            KickbackTorsoHit => (8, 2),
            CrouchHit => (8, 3),
            Fall => (9, 0),
            UppercutHit => (9, 1),
            Getup => (10, 1),
            Block => (12, 0),
            CrouchBlock => (12, 1),
            TurnRightToLeft => (12, 2),
            TurnLeftToRight => (12, 3),
            Special1 => (13, 0),
            GiddyFall => (14, 2),
            Win => (16, 0),
        }
    }

    pub fn is_airborne(self) -> bool {
        use Action::*;
        matches!(
            self,
            Jump | JumpBack
                | Roll
                | JumpPunch
                | ForwardJumpPunch
                | JumpLowKick
                | JumpHighKick
        )
    }

    /// Poses held while the crouch key stays down.
    pub fn is_crouch_pose(self) -> bool {
        matches!(self, Action::Crouch | Action::CrouchBlock)
    }

    /// The walk cycle plays backwards when retreating.
    pub fn plays_reversed(self) -> bool {
        self == Action::WalkBackward
    }
}
