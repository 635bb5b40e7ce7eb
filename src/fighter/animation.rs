use super::*;
use crate::combat::{ProjectileSprite, SpecialAttack};

pub fn plugin(app: &mut App) {
    app.add_systems(
        SimTick,
        (present_fighters, present_projectiles).in_set(SimSystems::Present),
    );
}

/// What the renderer should draw for an entity this tick.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct SpriteFrame {
    pub character: CharacterId,
    /// Sheet cell as (row, column).
    pub cell: (u32, u32),
    pub frame: u8,
    /// Mirror horizontally, sheets face right.
    pub flip: bool,
}

impl SpriteFrame {
    pub fn fighter(character: CharacterId) -> Self {
        Self {
            character,
            cell: Action::Stance.sheet_cell(),
            frame: 0,
            flip: false,
        }
    }

    /// Source rectangle on the character's sheet.
    pub fn rect(&self) -> Rect {
        SHEET.rect(self.cell, self.frame)
    }

    pub fn shadow_rect(&self) -> Rect {
        SHEET.shadow_rect(self.cell, self.frame)
    }
}

fn present_fighters(mut fighters: Query<(&PlayerState, &mut SpriteFrame), With<Fighter>>) {
    for (state, mut sprite) in fighters.iter_mut() {
        let frame = if state.action.plays_reversed() {
            state.busy_frames - 1 - state.curr_frame
        } else {
            state.curr_frame
        };
        let character = sprite.character;
        sprite.set_if_neq(SpriteFrame {
            character,
            cell: state.action.sheet_cell(),
            frame,
            flip: state.facing == Facing::Left,
        });
    }
}

fn present_projectiles(mut projectiles: Query<(&SpecialAttack, &mut SpriteFrame)>) {
    for (special, mut sprite) in projectiles.iter_mut() {
        let cell = match special.sprite {
            ProjectileSprite::Projectile => PROJECTILE_CELL,
            ProjectileSprite::Explosion => EXPLOSION_CELL,
        };
        let character = sprite.character;
        sprite.set_if_neq(SpriteFrame {
            character,
            cell,
            frame: special.frame,
            flip: special.facing == Facing::Left,
        });
    }
}
