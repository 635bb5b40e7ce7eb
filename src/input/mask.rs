use super::*;

bitflags! {
    /// One sampled frame of a player's controls.
    ///
    /// Raw samples carry `LEFT`/`RIGHT` plus the `FACING_RIGHT` and `AIRBORNE`
    /// status bits. [`InputMask::normalized`] folds the horizontal keys into
    /// `FORWARD`/`BACK` relative to facing and drops the status bits, which is
    /// the form every move pattern is written in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputMask: u16 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const LOW_PUNCH = 1 << 4;
        const HIGH_PUNCH = 1 << 5;
        const LOW_KICK = 1 << 6;
        const HIGH_KICK = 1 << 7;
        const BLOCK = 1 << 8;
        const FORWARD = 1 << 9;
        const BACK = 1 << 10;
        const FACING_RIGHT = 1 << 11;
        const AIRBORNE = 1 << 12;

        const PUNCH = Self::LOW_PUNCH.bits() | Self::HIGH_PUNCH.bits();
        const ATTACKS = Self::PUNCH.bits() | Self::LOW_KICK.bits() | Self::HIGH_KICK.bits();
    }
}

impl Default for InputMask {
    fn default() -> Self {
        Self::empty()
    }
}

impl InputMask {
    const ACTION_KEYS: Self = Self::UP
        .union(Self::DOWN)
        .union(Self::ATTACKS)
        .union(Self::BLOCK);

    /// Key bits with `LEFT`/`RIGHT` rewritten as `FORWARD`/`BACK`.
    pub fn normalized(self) -> Self {
        let facing_right = self.contains(Self::FACING_RIGHT);
        let mut out = self & Self::ACTION_KEYS;
        if self.contains(Self::RIGHT) {
            out |= if facing_right { Self::FORWARD } else { Self::BACK };
        }
        if self.contains(Self::LEFT) {
            out |= if facing_right { Self::BACK } else { Self::FORWARD };
        }
        out
    }

    pub fn airborne(self) -> bool {
        self.contains(Self::AIRBORNE)
    }
}

pub const RING_LEN: usize = 3;

/// Short history of sampled masks, newest at `head`.
#[derive(Component, Debug, Clone, Default)]
pub struct Inputs {
    slots: [InputMask; RING_LEN],
    head: usize,
}

impl Inputs {
    pub fn push(&mut self, mask: InputMask) {
        self.head = (self.head + 1) % RING_LEN;
        self.slots[self.head] = mask;
    }

    pub fn latest(&self) -> InputMask {
        self.slots[self.head]
    }

    /// Slot `offset` samples ago, wrapping around the ring.
    pub fn back(&self, offset: usize) -> InputMask {
        self.slots[(self.head + RING_LEN - offset % RING_LEN) % RING_LEN]
    }

    /// Oldest first.
    pub fn history(&self) -> [InputMask; RING_LEN] {
        std::array::from_fn(|i| self.back(RING_LEN - 1 - i))
    }

    /// Newest sample, normalized, equals `pattern` exactly.
    pub fn current_is(&self, pattern: InputMask) -> bool {
        !pattern.is_empty() && self.latest().normalized() == pattern
    }

    /// The whole ring, oldest first and each slot normalized with its own
    /// facing, equals `pattern`. An all-empty pattern never matches.
    pub fn matches_sequence(&self, pattern: &[InputMask; RING_LEN]) -> bool {
        if pattern.iter().all(|m| m.is_empty()) {
            return false;
        }
        self.history()
            .iter()
            .zip(pattern)
            .all(|(slot, want)| slot.normalized() == *want)
    }
}
