use super::*;

/// Hitbox a decision tick asks to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    Melee,
    Projectile,
}

/// Per-fighter state machine, advanced once per decision tick.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct PlayerState {
    pub action: Action,
    pub facing: Facing,
    pub jumping: bool,
    pub crouching: bool,
    pub attacking: bool,
    pub special_attacking: bool,
    pub laying: bool,
    pub busy: bool,
    /// Frames the current action occupies.
    pub busy_frames: u8,
    /// Frames elapsed in the current action.
    pub curr_frame: u8,
    pub freeze_frame: Option<u8>,
    /// Remaining decision ticks pinned at `freeze_frame`.
    pub freeze_hold: u32,
    /// Whether this action instance already spawned its hitbox.
    pub attack_spawned: bool,
}

impl PlayerState {
    pub fn new(facing: Facing, character: &Character) -> Self {
        Self {
            action: Action::Stance,
            facing,
            jumping: false,
            crouching: false,
            attacking: false,
            special_attacking: false,
            laying: false,
            busy: false,
            busy_frames: character.frames(Action::Stance),
            curr_frame: 0,
            freeze_frame: None,
            freeze_hold: 0,
            attack_spawned: false,
        }
    }

    /// One decision tick: expire, gate, enter or advance, then the spawn gate.
    pub fn step(&mut self, intent: Intent, character: &Character) -> Option<Strike> {
        if self.busy
            && self.curr_frame + 1 >= self.busy_frames
            && self.freeze_hold == 0
            && !self.jumping
        {
            self.busy = false;
        }

        let intent = if self.laying && !self.busy {
            Intent::busy(Action::Getup)
        } else {
            intent
        };

        let changed = intent.action != self.action || (intent.busy && !self.busy);
        if changed && self.accepts(&intent) {
            self.enter(&intent, character);
        } else {
            self.advance(intent.action);
        }

        self.strike_due()
    }

    fn accepts(&self, intent: &Intent) -> bool {
        if !self.busy {
            return true;
        }
        if intent.attack && !self.is_held() {
            return true;
        }
        self.action.is_crouch_pose() && !intent.crouching
    }

    pub fn enter(&mut self, intent: &Intent, character: &Character) {
        let was_crouching = self.crouching;

        self.action = intent.action;
        self.crouching = intent.crouching;
        self.attacking = intent.attack;
        self.special_attacking = intent.special;
        self.busy = intent.busy;
        self.jumping = intent.jumping;
        self.laying = false;
        self.attack_spawned = false;

        self.busy_frames = character.frames(intent.action);
        let last = self.busy_frames - 1;
        self.curr_frame = if intent.action == Action::Crouch && was_crouching {
            2.min(last)
        } else {
            0
        };
        (self.freeze_frame, self.freeze_hold) = match intent.freeze {
            Some(f) => (Some(f.frame.min(last)), f.hold),
            None => (None, 0),
        };
    }

    /// Moves `curr_frame` on by one, or pins it while a freeze hold lasts.
    /// The hold is extended first when the same action is still requested.
    fn advance(&mut self, requested: Action) {
        if let Some(freeze) = self.freeze_frame {
            if requested == self.action {
                self.freeze_hold = self.freeze_hold.saturating_add(1);
            }
            if self.curr_frame + 1 >= freeze && self.freeze_hold > 0 {
                self.freeze_hold -= 1;
                self.curr_frame = freeze;
                return;
            }
        }

        let next = self.curr_frame + 1;
        self.curr_frame = if next < self.busy_frames {
            next
        } else if self.jumping {
            self.busy_frames - 1
        } else {
            0
        };
    }

    fn strike_due(&mut self) -> Option<Strike> {
        if !self.busy || !self.attacking || self.attack_spawned {
            return None;
        }
        let point = if self.special_attacking {
            self.busy_frames / 2
        } else {
            self.busy_frames / 3
        };
        if self.curr_frame % self.busy_frames < point {
            return None;
        }
        self.attack_spawned = true;
        Some(if self.special_attacking {
            Strike::Projectile
        } else {
            Strike::Melee
        })
    }

    /// Enters a non-attack busy action regardless of the gate.
    pub fn force(&mut self, action: Action, character: &Character) {
        self.enter(&Intent::busy(action), character);
    }

    /// Plays `action` through, then lies on its last frame for `hold` ticks.
    pub fn knock_down(&mut self, action: Action, character: &Character, hold: u32) {
        self.force(action, character);
        self.laying = true;
        self.freeze_frame = Some(self.busy_frames - 1);
        self.freeze_hold = hold;
    }

    /// Jumps straight to the last frame of `action` and pins it there.
    pub fn pin(&mut self, action: Action, character: &Character, hold: u32) {
        self.force(action, character);
        self.curr_frame = self.busy_frames - 1;
        self.freeze_frame = Some(self.curr_frame);
        self.freeze_hold = hold;
    }

    /// Starts the turn animation towards `to`.
    pub fn turn(&mut self, to: Facing, character: &Character) {
        let action = match to {
            Facing::Left => Action::TurnRightToLeft,
            Facing::Right => Action::TurnLeftToRight,
        };
        self.force(action, character);
        self.facing = to;
    }

    /// Knocked down or frozen by a hold: nothing cuts in, attacks included.
    pub fn is_held(&self) -> bool {
        self.laying || (self.busy && self.freeze_hold > 0)
    }

    pub fn is_pinned(&self) -> bool {
        self.freeze_frame == Some(self.curr_frame) && self.freeze_hold > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> PlayerState {
        PlayerState::new(Facing::Right, &SUB_ZERO)
    }

    fn frame_in_range(state: &PlayerState) {
        assert!(
            state.curr_frame < state.busy_frames,
            "{:?} at {} of {}",
            state.action,
            state.curr_frame,
            state.busy_frames
        );
    }

    #[test]
    fn punch_spawns_once_per_instance() {
        let mut state = fresh();
        let punch = Intent::attack(Action::LowPunch);
        let strikes = (0..SUB_ZERO.frames(Action::LowPunch))
            .filter_map(|_| state.step(punch, &SUB_ZERO))
            .count();
        assert_eq!(strikes, 1);
        assert_eq!(state.action, Action::LowPunch);

        // released: the punch runs out and stance takes over
        assert_eq!(state.step(Intent::idle(Action::Stance), &SUB_ZERO), None);
        assert_eq!(state.action, Action::Stance);
    }

    #[test]
    fn held_punch_repeats_with_a_new_spawn() {
        let mut state = fresh();
        let punch = Intent::attack(Action::LowPunch);
        let strikes = (0..SUB_ZERO.frames(Action::LowPunch) * 2)
            .filter_map(|_| state.step(punch, &SUB_ZERO))
            .count();
        assert_eq!(strikes, 2);
    }

    #[test]
    fn special_spawns_at_half() {
        let mut state = fresh();
        let special = Intent::special(Action::Special1);
        let mut spawned_at = None;
        for _ in 0..SUB_ZERO.frames(Action::Special1) {
            if state.step(special, &SUB_ZERO) == Some(Strike::Projectile) {
                spawned_at = Some(state.curr_frame);
            }
        }
        assert_eq!(spawned_at, Some(5));
    }

    #[test]
    fn frame_stays_in_range_over_mixed_input() {
        let script = [
            Intent::idle(Action::WalkForward),
            Intent::attack(Action::HighKick),
            Intent::idle(Action::Crouch).crouched().held_at(2, 1),
            Intent::attack(Action::Uppercut).crouched(),
            Intent::idle(Action::Block).held_at(2, 1),
            Intent::idle(Action::Stance),
        ];
        let mut state = fresh();
        for intent in script {
            for _ in 0..13 {
                state.step(intent, &SUB_ZERO);
                frame_in_range(&state);
            }
        }
    }

    #[test]
    fn block_pins_while_held() {
        let mut state = fresh();
        let block = Intent::idle(Action::Block).held_at(2, 1);
        for _ in 0..10 {
            state.step(block, &SUB_ZERO);
        }
        assert_eq!(state.action, Action::Block);
        assert_eq!(state.curr_frame, 2);
        assert!(state.is_pinned());

        state.step(Intent::idle(Action::Stance), &SUB_ZERO);
        assert_eq!(state.action, Action::Stance);
    }

    #[test]
    fn crouch_reentry_skips_startup() {
        let mut state = fresh();
        let crouch = Intent::idle(Action::Crouch).crouched().held_at(2, 1);
        state.step(crouch, &SUB_ZERO);
        state.step(Intent::idle(Action::CrouchBlock).crouched().held_at(2, 1), &SUB_ZERO);
        assert_eq!(state.action, Action::CrouchBlock);
        assert_eq!(state.curr_frame, 0);

        state.step(crouch, &SUB_ZERO);
        assert_eq!(state.action, Action::Crouch);
        assert_eq!(state.curr_frame, 2);
    }

    #[test]
    fn busy_action_ignores_movement_until_done() {
        let mut state = fresh();
        state.step(Intent::attack(Action::HighKick), &SUB_ZERO);
        state.step(Intent::idle(Action::WalkBackward), &SUB_ZERO);
        assert_eq!(state.action, Action::HighKick);
        state.step(Intent::idle(Action::Block).held_at(2, 1), &SUB_ZERO);
        assert_eq!(state.action, Action::HighKick);
    }

    #[test]
    fn attack_cuts_into_busy_actions() {
        let mut state = fresh();
        state.step(Intent::attack(Action::HighKick), &SUB_ZERO);
        state.step(Intent::attack(Action::LowPunch), &SUB_ZERO);
        assert_eq!(state.action, Action::LowPunch);
        assert_eq!(state.curr_frame, 0);
        assert!(!state.attack_spawned);

        state.force(Action::TorsoHit, &SUB_ZERO);
        state.step(Intent::attack(Action::LowPunch), &SUB_ZERO);
        assert_eq!(state.action, Action::LowPunch);
        assert!(state.attacking && state.busy);
    }

    #[test]
    fn held_attack_keeps_running_instead_of_restarting() {
        let mut state = fresh();
        let kick = Intent::attack(Action::HighKick);
        for _ in 0..4 {
            state.step(kick, &SUB_ZERO);
        }
        assert_eq!(state.curr_frame, 3);
    }

    #[test]
    fn knockdown_and_knockout_poses_refuse_attacks() {
        let mut state = fresh();
        state.knock_down(Action::UppercutHit, &SUB_ZERO, 6);
        state.step(Intent::attack(Action::LowPunch), &SUB_ZERO);
        assert_eq!(state.action, Action::UppercutHit);
        assert!(state.laying);

        let mut state = fresh();
        state.pin(Action::Win, &SUB_ZERO, u32::MAX);
        for _ in 0..10 {
            state.step(Intent::attack(Action::HighKick), &SUB_ZERO);
        }
        assert_eq!(state.action, Action::Win);
        assert!(state.is_pinned());
    }

    #[test]
    fn attack_cancels_landing() {
        let mut state = fresh();
        state.force(Action::Landing, &SUB_ZERO);
        state.step(Intent::attack(Action::LowKick), &SUB_ZERO);
        assert_eq!(state.action, Action::LowKick);
        assert!(state.attacking);
    }

    #[test]
    fn jump_holds_last_frame_until_landing() {
        let mut state = fresh();
        state.step(Intent::busy(Action::Roll).airborne(), &SUB_ZERO);
        for _ in 0..20 {
            state.step(Intent::idle(Action::Stance), &SUB_ZERO);
        }
        assert_eq!(state.action, Action::Roll);
        assert_eq!(state.curr_frame, SUB_ZERO.frames(Action::Roll) - 1);
        assert!(state.busy);

        state.step(Intent::attack(Action::JumpHighKick).airborne(), &SUB_ZERO);
        assert_eq!(state.action, Action::JumpHighKick);
        assert!(state.jumping);
    }

    #[test]
    fn knockdown_forces_getup() {
        let mut state = fresh();
        state.knock_down(Action::UppercutHit, &SUB_ZERO, 6);
        let last = SUB_ZERO.frames(Action::UppercutHit) - 1;

        let mut pinned_ticks = 0;
        for _ in 0..40 {
            state.step(Intent::idle(Action::Block).held_at(2, 1), &SUB_ZERO);
            frame_in_range(&state);
            if state.action != Action::UppercutHit {
                break;
            }
            if state.curr_frame == last {
                pinned_ticks += 1;
            }
        }
        assert_eq!(state.action, Action::Getup);
        assert!(!state.laying);
        assert!(state.busy);
        assert_eq!(pinned_ticks, 6);
    }

    #[test]
    fn pin_never_advances() {
        let mut state = fresh();
        state.pin(Action::Win, &SUB_ZERO, u32::MAX);
        let frame = state.curr_frame;
        for _ in 0..100 {
            state.step(Intent::attack(Action::LowPunch), &SUB_ZERO);
        }
        assert_eq!(state.action, Action::Win);
        assert_eq!(state.curr_frame, frame);
    }

    #[test]
    fn turn_sets_facing() {
        let mut state = fresh();
        state.turn(Facing::Left, &SUB_ZERO);
        assert_eq!(state.action, Action::TurnRightToLeft);
        assert_eq!(state.facing, Facing::Left);
        assert!(state.busy);
    }
}
