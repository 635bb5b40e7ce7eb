use super::*;
use crate::input::InputMask;

/// Shared layout of every character sheet. All characters are cut from the
/// same grid, only the pixels differ.
pub struct SheetLayout {
    /// Size of one character cell.
    pub cell: Vec2,
    /// Distance between neighbouring actions, horizontally and vertically.
    pub action_stride: Vec2,
    /// Top-left of the stance cell.
    pub origin: Vec2,
    /// Horizontal shift between frames of one action.
    pub frame_shift: f32,
    /// Gap between a character row and its shadow row.
    pub shadow_gap: f32,
}

pub const SHEET: SheetLayout = SheetLayout {
    cell: Vec2::new(230.0, 220.0),
    action_stride: Vec2::new(238.0, 302.0),
    origin: Vec2::new(32.0, 58.0),
    frame_shift: 4.0,
    shadow_gap: 8.0,
};

/// On-screen scale of a character cell.
pub const CHARACTER_SCALE: f32 = 0.8;

/// Sheet cells of the projectile and its explosion, after the special pose.
pub const PROJECTILE_CELL: (u32, u32) = (13, 1);
pub const EXPLOSION_CELL: (u32, u32) = (13, 2);

impl SheetLayout {
    /// Source rectangle of `frame` within the action at `(row, column)`.
    pub fn rect(&self, (row, column): (u32, u32), frame: u8) -> Rect {
        let min = self.origin
            + Vec2::new(
                column as f32 * self.action_stride.x + f32::from(frame) * self.frame_shift,
                row as f32 * self.action_stride.y,
            );
        Rect::from_corners(min, min + self.cell)
    }

    /// The same frame's shadow, cut from just below the character.
    pub fn shadow_rect(&self, cell: (u32, u32), frame: u8) -> Rect {
        let rect = self.rect(cell, frame);
        let drop = Vec2::new(0.0, self.cell.y + self.shadow_gap);
        Rect::from_corners(rect.min + drop, rect.max + drop)
    }

    /// Size of a character cell once scaled onto the stage.
    pub fn scaled_cell(&self) -> Vec2 {
        self.cell * CHARACTER_SCALE
    }
}

/// Input sequence over the whole ring that fires a special move.
pub struct SpecialMove {
    pub name: &'static str,
    pub sequence: [InputMask; 3],
    pub action: Action,
}

/// Static, immutable description of a playable character.
pub struct Character {
    pub name: &'static str,
    /// Sprite sheet, relative to the assets folder.
    pub sheet: &'static str,
    frames: &'static [(Action, u8)],
    pub specials: &'static [SpecialMove],
    pub projectile_frames: u8,
    pub explosion_frames: u8,
    /// Region of the name plate on the sheet.
    pub name_plate: Rect,
}

impl Character {
    /// Frames in `action`, never less than one.
    pub fn frames(&self, action: Action) -> u8 {
        self.frames
            .iter()
            .find_map(|(a, n)| (*a == action).then_some(*n))
            .unwrap_or(1)
            .max(1)
    }
}

const FRAMES: &[(Action, u8)] = &[
    (Action::Stance, 12),
    (Action::WalkForward, 9),
    (Action::WalkBackward, 9),
    (Action::HighPunch, 5),
    (Action::LowPunch, 5),
    (Action::LowKick, 7),
    (Action::LowSweepKick, 8),
    (Action::HighKick, 10),
    (Action::HighSweepKick, 8),
    (Action::Crouch, 5),
    (Action::Uppercut, 5),
    (Action::CrouchKick, 5),
    (Action::Jump, 1),
    (Action::JumpPunch, 5),
    (Action::JumpHighKick, 3),
    (Action::Landing, 3),
    (Action::JumpBack, 1),
    (Action::Roll, 7),
    (Action::ForwardJumpPunch, 5),
    (Action::JumpLowKick, 5),
    (Action::TorsoHit, 4),
    (Action::HeadHit, 4),
    (Action::KickbackTorsoHit, 6),
    (Action::CrouchHit, 3),
    (Action::Fall, 5),
    (Action::UppercutHit, 6),
    (Action::Getup, 5),
    (Action::Block, 5),
    (Action::CrouchBlock, 5),
    (Action::TurnRightToLeft, 4),
    (Action::TurnLeftToRight, 4),
    (Action::Special1, 10),
    (Action::GiddyFall, 7),
    (Action::Win, 4),
];

const FWD: InputMask = InputMask::FORWARD;
const BACK: InputMask = InputMask::BACK;
const DOWN: InputMask = InputMask::DOWN;
const LP: InputMask = InputMask::LOW_PUNCH;

pub static SUB_ZERO: Character = Character {
    name: "Sub-Zero",
    sheet: "sprites/sub_zero.png",
    frames: FRAMES,
    specials: &[SpecialMove {
        name: "ice ball",
        sequence: [DOWN, DOWN.union(FWD), FWD.union(LP)],
        action: Action::Special1,
    }],
    projectile_frames: 3,
    explosion_frames: 4,
    name_plate: Rect {
        min: Vec2::new(0.0, 4900.0),
        max: Vec2::new(180.0, 4930.0),
    },
};

pub static SCORPION: Character = Character {
    name: "Scorpion",
    sheet: "sprites/scorpion.png",
    frames: FRAMES,
    specials: &[SpecialMove {
        name: "spear",
        sequence: [BACK, BACK, FWD.union(LP)],
        action: Action::Special1,
    }],
    projectile_frames: 3,
    explosion_frames: 4,
    name_plate: Rect {
        min: Vec2::new(0.0, 4900.0),
        max: Vec2::new(180.0, 4930.0),
    },
};

/// Roster entry a fighter is played as.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[reflect(Component)]
pub enum CharacterId {
    SubZero,
    Scorpion,
}

impl CharacterId {
    pub fn data(self) -> &'static Character {
        match self {
            CharacterId::SubZero => &SUB_ZERO,
            CharacterId::Scorpion => &SCORPION,
        }
    }
}
