use super::*;
use crate::fighter::{PROJECTILE_CELL, SpriteFrame};
use crate::physics::SensorBox;

/// Lifetimes in ticks.
pub const MELEE_LIFETIME: u32 = 3;
pub const PROJECTILE_LIFETIME: u32 = 90;
pub const EXPLOSION_LIFETIME: u32 = 12;

pub const PROJECTILE_SPEED: f32 = 8.0;
pub const PROJECTILE_SIZE: Vec2 = Vec2::new(64.0, 32.0);
pub const EXPLOSION_SIZE: Vec2 = Vec2::new(96.0, 96.0);
/// Where a projectile leaves the hand, from the thrower's feet when facing right.
const PROJECTILE_LAUNCH: Vec2 = Vec2::new(60.0, 110.0);

pub fn plugin(app: &mut App) {
    app.add_systems(
        SimTick,
        (
            animate_projectiles.run_if(decision_tick),
            expire,
            detonate,
        )
            .chain()
            .in_set(SimSystems::Lifecycle),
    );
}

/// Hitbox centre (relative to the attacker's feet, facing right) and size.
fn reach(action: Action) -> (Vec2, Vec2) {
    use Action::*;
    match action {
        LowPunch => (Vec2::new(70.0, 95.0), Vec2::new(50.0, 24.0)),
        HighPunch => (Vec2::new(70.0, 135.0), Vec2::new(50.0, 24.0)),
        LowKick => (Vec2::new(75.0, 80.0), Vec2::new(60.0, 30.0)),
        HighKick => (Vec2::new(80.0, 130.0), Vec2::new(60.0, 30.0)),
        LowSweepKick | CrouchKick => (Vec2::new(70.0, 20.0), Vec2::new(70.0, 24.0)),
        HighSweepKick => (Vec2::new(70.0, 60.0), Vec2::new(70.0, 24.0)),
        Uppercut => (Vec2::new(55.0, 110.0), Vec2::new(40.0, 60.0)),
        JumpPunch | ForwardJumpPunch | JumpLowKick | JumpHighKick => {
            (Vec2::new(60.0, 80.0), Vec2::new(60.0, 40.0))
        }
        _ => (Vec2::new(60.0, 100.0), Vec2::new(50.0, 30.0)),
    }
}

pub fn spawn_melee(
    commands: &mut Commands,
    attacker: Entity,
    action: Action,
    facing: Facing,
    feet: Vec2,
) {
    let (offset, size) = reach(action);
    let centre = feet + Vec2::new(offset.x * facing.sign(), offset.y);
    commands.spawn((
        Name::new(format!("{action:?} hitbox")),
        Attack {
            action,
            attacker,
            landed: false,
        },
        Lifetime(MELEE_LIFETIME),
        Position(centre),
        SensorBox::centred(size),
        Transform::from_translation(centre.extend(2.0)),
    ));
}

pub fn spawn_projectile(
    commands: &mut Commands,
    attacker: Entity,
    character: CharacterId,
    facing: Facing,
    feet: Vec2,
) {
    let centre = feet + Vec2::new(PROJECTILE_LAUNCH.x * facing.sign(), PROJECTILE_LAUNCH.y);
    let sensor = SensorBox::new(PROJECTILE_SIZE, PROJECTILE_SIZE / 2.0);
    commands.spawn((
        Name::new(format!("{} projectile", character.data().name)),
        Attack {
            action: Action::Special1,
            attacker,
            landed: false,
        },
        SpecialAttack {
            sprite: ProjectileSprite::Projectile,
            facing,
            frame: 0,
            total_frames: character.data().projectile_frames,
            explode: false,
        },
        character,
        Lifetime(PROJECTILE_LIFETIME),
        Position(centre - PROJECTILE_SIZE / 2.0),
        Velocity(Vec2::new(facing.sign() * PROJECTILE_SPEED, 0.0)),
        sensor,
        Transform::from_translation(centre.extend(2.0)),
        SpriteFrame {
            character,
            cell: PROJECTILE_CELL,
            frame: 0,
            flip: facing == Facing::Left,
        },
    ));
}

fn animate_projectiles(mut projectiles: Query<&mut SpecialAttack>) {
    for mut special in projectiles.iter_mut() {
        special.frame = (special.frame + 1) % special.total_frames.max(1);
    }
}

/// Turns flagged projectiles into explosions centred where they hit.
fn detonate(
    mut projectiles: Query<(
        &CharacterId,
        &mut SpecialAttack,
        &mut Position,
        &mut Velocity,
        &mut Lifetime,
        &mut SensorBox,
    )>,
) {
    for (id, mut special, mut position, mut velocity, mut lifetime, mut sensor) in
        projectiles.iter_mut()
    {
        if !special.explode || special.sprite == ProjectileSprite::Explosion {
            continue;
        }
        let centre = sensor.centre(**position);

        special.explode = false;
        special.sprite = ProjectileSprite::Explosion;
        special.frame = 0;
        special.total_frames = id.data().explosion_frames;
        **velocity = Vec2::ZERO;
        *sensor = SensorBox::new(EXPLOSION_SIZE, EXPLOSION_SIZE / 2.0);
        **position = centre - EXPLOSION_SIZE / 2.0;
        **lifetime = EXPLOSION_LIFETIME;
    }
}

/// Ages every transient hitbox and despawns it, body included, at zero.
fn expire(mut attacks: Query<(Entity, &mut Lifetime)>, mut commands: Commands) {
    for (entity, mut lifetime) in attacks.iter_mut() {
        **lifetime = lifetime.saturating_sub(1);
        if **lifetime == 0 {
            commands.entity(entity).despawn();
        }
    }
}
