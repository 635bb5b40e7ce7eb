use super::*;
use crate::fighter::CharacterId;
use crate::input::KeyMap;
use std::{fs, path::Path};

pub const CONFIG_PATH: &str = "assets/match.ron";

pub fn plugin(app: &mut App) {
    app.init_resource::<MatchConfig>();
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read match config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse match config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Parameters of the single hard-coded match.
#[derive(Resource, Reflect, Deserialize, Serialize, Debug, Clone)]
#[reflect(Resource)]
pub struct MatchConfig {
    /// Simulation ticks per second.
    pub tick_hz: f64,
    pub cadence: Cadence,
    pub stage: StageConfig,
    /// Starting health of both fighters.
    pub health: i32,
    pub players: [PlayerSetup; 2],
}

/// Dividers of the tick counter.
#[derive(Reflect, Deserialize, Serialize, Debug, Clone, Copy)]
pub struct Cadence {
    pub input_every: u32,
    pub decide_every: u32,
}

#[derive(Reflect, Deserialize, Serialize, Debug, Clone, Copy)]
pub struct StageConfig {
    pub width: f32,
    pub height: f32,
    /// World y of the stage floor.
    pub floor: f32,
}

#[derive(Reflect, Deserialize, Serialize, Debug, Clone)]
pub struct PlayerSetup {
    pub character: CharacterId,
    /// Feet x at round start.
    pub start_x: f32,
    pub keys: KeyMap,
}

impl MatchConfig {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(ron::from_str(&content)?)
    }

    /// Reads [`CONFIG_PATH`], falling back to the compiled defaults.
    pub fn load() -> Self {
        match Self::read(CONFIG_PATH) {
            Ok(config) => {
                info!("loaded match config from {CONFIG_PATH}");
                config
            }
            Err(ConfigError::Io(e)) => {
                info!("no match config at {CONFIG_PATH} ({e}), using defaults");
                Self::default()
            }
            Err(e) => {
                warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    pub fn player(&self, id: PlayerId) -> &PlayerSetup {
        &self.players[id.index()]
    }

    /// Same match, both dividers set to 1. Handy for frame-exact tests.
    pub fn every_tick(mut self) -> Self {
        self.cadence = Cadence {
            input_every: 1,
            decide_every: 1,
        };
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            cadence: Cadence {
                input_every: 2,
                decide_every: 4,
            },
            stage: StageConfig {
                width: 800.0,
                height: 600.0,
                floor: 0.0,
            },
            health: 100,
            players: [
                PlayerSetup {
                    character: CharacterId::SubZero,
                    start_x: 250.0,
                    keys: KeyMap::player_one(),
                },
                PlayerSetup {
                    character: CharacterId::Scorpion,
                    start_x: 550.0,
                    keys: KeyMap::player_two(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_survives_ron() {
        let config = MatchConfig::default();
        let text = ron::ser::to_string_pretty(&config, Default::default()).unwrap();
        let back: MatchConfig = ron::from_str(&text).unwrap();
        assert_eq!(back.cadence.decide_every, 4);
        assert_eq!(back.players[1].character, CharacterId::Scorpion);
        assert_eq!(back.players[0].keys.low_punch, KeyCode::KeyF);
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let shipped = MatchConfig::read(CONFIG_PATH).unwrap();
        let defaults = MatchConfig::default();
        assert_eq!(shipped.health, defaults.health);
        assert_eq!(shipped.cadence.input_every, defaults.cadence.input_every);
        assert_eq!(shipped.players[0].keys, defaults.players[0].keys);
        assert_eq!(shipped.players[1].keys, defaults.players[1].keys);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = MatchConfig::read("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = std::env::temp_dir().join("kombat-malformed-match.ron");
        fs::write(&path, "(tick_hz: \"fast\")").unwrap();
        let err = MatchConfig::read(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
