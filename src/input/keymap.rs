use super::*;

/// Physical keys bound to each control of one player.
#[derive(Component, Reflect, Deserialize, Serialize, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct KeyMap {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub low_punch: KeyCode,
    pub high_punch: KeyCode,
    pub low_kick: KeyCode,
    pub high_kick: KeyCode,
    pub block: KeyCode,
}

impl KeyMap {
    pub fn player_one() -> Self {
        Self {
            up: KeyCode::KeyW,
            down: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            low_punch: KeyCode::KeyF,
            high_punch: KeyCode::KeyR,
            low_kick: KeyCode::KeyG,
            high_kick: KeyCode::KeyT,
            block: KeyCode::KeyH,
        }
    }

    pub fn player_two() -> Self {
        Self {
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            low_punch: KeyCode::KeyK,
            high_punch: KeyCode::KeyI,
            low_kick: KeyCode::KeyL,
            high_kick: KeyCode::KeyO,
            block: KeyCode::Quote,
        }
    }

    fn bindings(&self) -> [(KeyCode, InputMask); 9] {
        [
            (self.up, InputMask::UP),
            (self.down, InputMask::DOWN),
            (self.left, InputMask::LEFT),
            (self.right, InputMask::RIGHT),
            (self.low_punch, InputMask::LOW_PUNCH),
            (self.high_punch, InputMask::HIGH_PUNCH),
            (self.low_kick, InputMask::LOW_KICK),
            (self.high_kick, InputMask::HIGH_KICK),
            (self.block, InputMask::BLOCK),
        ]
    }

    /// ORs together the bits of every held key.
    pub fn sample(&self, keys: &ButtonInput<KeyCode>) -> InputMask {
        self.bindings()
            .into_iter()
            .filter(|(key, _)| keys.pressed(*key))
            .fold(InputMask::empty(), |mask, (_, bit)| mask | bit)
    }

    /// Key bound to a single control bit, used by tests.
    pub fn key_for(&self, bit: InputMask) -> Option<KeyCode> {
        self.bindings()
            .into_iter()
            .find_map(|(key, b)| (b == bit).then_some(key))
    }
}
