use super::*;

pub fn plugin(app: &mut App) {
    app.register_type::<Position>()
        .register_type::<Velocity>()
        .register_type::<Side>();
}

/// Macro to hide the derive trait boilerplate
macro_rules! markers {
  ( $( $name:ident ),* ) => {
        $(
            #[derive(Component, Reflect, Clone, Default)]
            #[reflect(Component)]
            pub struct $name;
        )*
    };
}

markers!(Fighter, Boundary);

/// Authoritative world-space location, written only by the movement pass.
///
/// For fighters this is the middle of the feet, for projectiles the
/// bottom-left corner of the sprite box, for melee hitboxes the box centre.
#[derive(Component, Reflect, Deref, DerefMut, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component)]
pub struct Position(pub Vec2);

/// Per-tick displacement in pixels.
#[derive(Component, Reflect, Deref, DerefMut, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component)]
pub struct Velocity(pub Vec2);

/// Stage edge a [`Boundary`] sensor sits on.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub enum Side {
    Left,
    Right,
}
