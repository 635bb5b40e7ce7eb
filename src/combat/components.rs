use super::*;

pub fn plugin(app: &mut App) {
    app.register_type::<Health>()
        .register_type::<Attack>()
        .register_type::<SpecialAttack>()
        .register_type::<Lifetime>();
}

/// Health of a fighter. Current may drop below zero on the finishing blow.
#[derive(Component, Reflect, Debug, Clone, PartialEq, Eq)]
#[reflect(Component)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Returns true once the fighter is out of health.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.current -= amount;
        self.is_out()
    }

    pub fn is_out(&self) -> bool {
        self.current <= 0
    }

    pub fn fraction(&self) -> f32 {
        self.current.max(0) as f32 / self.max as f32
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Transient hitbox of one attack instance.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct Attack {
    pub action: Action,
    pub attacker: Entity,
    /// Already resolved against a defender.
    pub landed: bool,
}

/// Remaining life in ticks.
#[derive(Component, Reflect, Deref, DerefMut, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct Lifetime(pub u32);

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileSprite {
    Projectile,
    Explosion,
}

/// Projectile state carried next to its [`Attack`].
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct SpecialAttack {
    pub sprite: ProjectileSprite,
    pub facing: Facing,
    pub frame: u8,
    pub total_frames: u8,
    /// Set on impact, consumed by the lifecycle pass.
    pub explode: bool,
}

/// An attack sensor started overlapping a fighter that isn't its owner.
#[derive(Event, Debug, Clone, Copy)]
pub struct HitEvent {
    pub attack: Entity,
    pub defender: Entity,
}
