// Disable console on Windows for non-dev builds.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::{
    asset::{AssetMetaCheck, LoadState},
    log,
    platform::collections::HashSet,
    prelude::*,
    window::WindowResolution,
};
use kombat::{
    Fighter, MatchConfig, PlayerId, Position, SimulationPlugin,
    combat::Health,
    duel::WinBanner,
    fighter::{CharacterId, SHEET, SpriteFrame},
    physics::{self, SensorBox},
};

#[cfg(feature = "dev")]
mod dev_tools;

fn main() {
    let config = MatchConfig::load();
    let mut app = App::new();

    let mut resolution = WindowResolution::default();
    resolution.set(config.stage.width, config.stage.height);
    let window = WindowPlugin {
        primary_window: Some(Window {
            title: "Kombat".to_string(),
            resolution,
            resizable: false,
            ..default()
        }),
        ..default()
    };
    let assets = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };
    let filter = "info,kombat=debug,calloop=off,naga=off,wgpu=warn".to_string();
    let log_level = log::LogPlugin {
        level: log::Level::DEBUG,
        filter,
        ..Default::default()
    };

    app.add_plugins(DefaultPlugins.set(window).set(assets).set(log_level))
        .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
        .insert_resource(config);

    app.add_plugins((SimulationPlugin, physics::avian::plugin))
        .add_systems(Startup, (spawn_camera, load_sheets))
        .add_systems(
            Update,
            (
                attach_sprites,
                attach_hud,
                warn_missing_sheets,
                draw_sprites,
                draw_name_plates,
                draw_health,
                show_banner,
            )
                .chain(),
        );

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);

    app.run();
}

const BAR_SIZE: Vec2 = Vec2::new(300.0, 16.0);
const HUD_MARGIN: f32 = 30.0;

/// Sprite drawing one simulation entity, or its shadow.
#[derive(Component, Debug, Clone, Copy)]
struct SheetSprite {
    owner: Entity,
    shadow: bool,
}

/// Character name plate cut from the sheet.
#[derive(Component, Debug, Clone, Copy)]
struct NamePlate(CharacterId);

/// Health bar of one fighter, anchored to its side of the screen.
#[derive(Component, Debug, Clone, Copy)]
struct HealthBar {
    owner: Entity,
    player: PlayerId,
}

/// Character sheets. The images aren't shipped with the repository; a sheet
/// that fails to load is drawn as flat coloured boxes instead.
#[derive(Resource, Debug, Clone)]
struct Sheets {
    sub_zero: Handle<Image>,
    scorpion: Handle<Image>,
}

impl Sheets {
    fn get(&self, id: CharacterId) -> Handle<Image> {
        match id {
            CharacterId::SubZero => self.sub_zero.clone(),
            CharacterId::Scorpion => self.scorpion.clone(),
        }
    }

    fn missing(&self, assets: &AssetServer, id: CharacterId) -> bool {
        matches!(assets.load_state(&self.get(id)), LoadState::Failed(_))
    }
}

/// Box colour of a character without its sheet.
fn tint(id: CharacterId) -> Color {
    match id {
        CharacterId::SubZero => Color::srgb(0.2, 0.5, 0.9),
        CharacterId::Scorpion => Color::srgb(0.9, 0.8, 0.1),
    }
}

fn spawn_camera(config: Res<MatchConfig>, mut commands: Commands) {
    let centre = Vec2::new(config.stage.width, config.stage.height) / 2.0;
    commands.spawn((
        Name::new("Camera"),
        Camera2d,
        Transform::from_translation(centre.extend(10.0)),
    ));
}

fn load_sheets(assets: Res<AssetServer>, mut commands: Commands) {
    commands.insert_resource(Sheets {
        sub_zero: assets.load(CharacterId::SubZero.data().sheet),
        scorpion: assets.load(CharacterId::Scorpion.data().sheet),
    });
}

fn attach_sprites(
    sheets: Res<Sheets>,
    added: Query<(Entity, &SpriteFrame, Has<Fighter>), Added<SpriteFrame>>,
    mut commands: Commands,
) {
    for (owner, frame, is_fighter) in added.iter() {
        let shadows: &[bool] = if is_fighter { &[false, true] } else { &[false] };
        for &shadow in shadows {
            commands.spawn((
                SheetSprite { owner, shadow },
                Sprite {
                    image: sheets.get(frame.character),
                    rect: Some(frame.rect()),
                    ..default()
                },
                Transform::default(),
            ));
        }
    }
}

/// Left edge of a bar's full extent.
fn bar_left(config: &MatchConfig, player: PlayerId) -> f32 {
    match player {
        PlayerId::One => HUD_MARGIN,
        PlayerId::Two => config.stage.width - HUD_MARGIN - BAR_SIZE.x,
    }
}

fn attach_hud(
    config: Res<MatchConfig>,
    sheets: Res<Sheets>,
    added: Query<(Entity, &PlayerId, &CharacterId), Added<Fighter>>,
    mut commands: Commands,
) {
    let top = config.stage.height - HUD_MARGIN;
    for (owner, &player, &character) in added.iter() {
        let left = bar_left(&config, player);
        let centre = Vec2::new(left + BAR_SIZE.x / 2.0, top - BAR_SIZE.y / 2.0);
        commands.spawn((
            Name::new(format!("{} health bar", player.as_str())),
            HealthBar { owner, player },
            Sprite::from_color(Color::srgb(0.1, 0.8, 0.1), BAR_SIZE),
            Transform::from_translation(centre.extend(4.0)),
        ));

        let plate = character.data().name_plate;
        let plate_centre = Vec2::new(centre.x, top - BAR_SIZE.y - plate.height() / 2.0 - 4.0);
        commands.spawn((
            Name::new(format!("{} name plate", player.as_str())),
            NamePlate(character),
            Sprite {
                image: sheets.get(character),
                rect: Some(plate),
                ..default()
            },
            Transform::from_translation(plate_centre.extend(4.0)),
        ));
    }
}

fn warn_missing_sheets(
    assets: Res<AssetServer>,
    sheets: Res<Sheets>,
    mut warned: Local<HashSet<CharacterId>>,
) {
    for id in [CharacterId::SubZero, CharacterId::Scorpion] {
        if sheets.missing(&assets, id) && warned.insert(id) {
            warn!("{} not found, drawing {} as boxes", id.data().sheet, id.data().name);
        }
    }
}

/// Places every sprite from its owner's position and despawns orphans.
fn draw_sprites(
    assets: Res<AssetServer>,
    sheets: Res<Sheets>,
    owners: Query<(&SpriteFrame, &Position, &SensorBox, Has<Fighter>)>,
    mut sprites: Query<(Entity, &SheetSprite, &mut Sprite, &mut Transform)>,
    mut commands: Commands,
) {
    let fighter_size = SHEET.scaled_cell();
    for (entity, link, mut sprite, mut transform) in sprites.iter_mut() {
        let Ok((frame, position, sensor, is_fighter)) = owners.get(link.owner) else {
            commands.entity(entity).despawn();
            continue;
        };
        let z = match (is_fighter, link.shadow) {
            (true, true) => 0.5,
            (true, false) => 1.0,
            (false, _) => 2.0,
        };
        if sheets.missing(&assets, frame.character) {
            sprite.image = Handle::default();
            sprite.rect = None;
            sprite.color = if link.shadow {
                Color::NONE
            } else {
                tint(frame.character)
            };
            sprite.custom_size = Some(sensor.size);
            transform.translation = sensor.centre(**position).extend(z);
            continue;
        }

        let (centre, size) = if is_fighter {
            (**position + Vec2::new(0.0, fighter_size.y / 2.0), fighter_size)
        } else {
            (sensor.centre(**position), sensor.size)
        };
        sprite.rect = Some(if link.shadow {
            frame.shadow_rect()
        } else {
            frame.rect()
        });
        sprite.flip_x = frame.flip;
        sprite.custom_size = Some(size);
        transform.translation = centre.extend(z);
    }
}

fn draw_name_plates(
    assets: Res<AssetServer>,
    sheets: Res<Sheets>,
    mut plates: Query<(&NamePlate, &mut Sprite)>,
) {
    for (&NamePlate(character), mut sprite) in plates.iter_mut() {
        let Some(plate) = sprite.rect else {
            continue;
        };
        if sheets.missing(&assets, character) {
            sprite.image = Handle::default();
            sprite.rect = None;
            sprite.custom_size = Some(plate.size());
            sprite.color = tint(character);
        }
    }
}

/// Shrinks each bar towards its outer edge as health drops.
fn draw_health(
    config: Res<MatchConfig>,
    fighters: Query<&Health, Changed<Health>>,
    mut bars: Query<(&HealthBar, &mut Sprite, &mut Transform)>,
) {
    for (bar, mut sprite, mut transform) in bars.iter_mut() {
        let Ok(health) = fighters.get(bar.owner) else {
            continue;
        };
        let width = BAR_SIZE.x * health.fraction();
        let left = bar_left(&config, bar.player);
        transform.translation.x = match bar.player {
            PlayerId::One => left + width / 2.0,
            PlayerId::Two => left + BAR_SIZE.x - width / 2.0,
        };
        sprite.custom_size = Some(Vec2::new(width, BAR_SIZE.y));
    }
}

fn show_banner(
    config: Res<MatchConfig>,
    banners: Query<&WinBanner, Added<WinBanner>>,
    mut commands: Commands,
) {
    for banner in banners.iter() {
        let centre = Vec2::new(config.stage.width / 2.0, config.stage.height * 0.75);
        commands.spawn((
            Name::new("Win banner text"),
            Text2d::new(banner.text()),
            TextFont {
                font_size: 48.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Transform::from_translation(centre.extend(5.0)),
        ));
    }
}
