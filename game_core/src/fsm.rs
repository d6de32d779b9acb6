//! Screen State Machine
//!
//! Start screen, play, game over with restart. Quit is only accepted on the
//! game-over screen.

use crate::Player;

/// Screen states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Start,
    Playing,
    GameOver(Player), // winner
    Terminated,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    BallMissed(Player), // winner
    Restart,
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: FsmState,
    to_state: FsmState,
    action: GameAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> FsmState {
        self.from_state
    }

    pub fn to_state(&self) -> FsmState {
        self.to_state
    }

    pub fn action(&self) -> GameAction {
        self.action
    }
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Start,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            log::info!("{from_state:?} -> {next_state:?} ({action:?})");
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            log::debug!("Rejected {action:?} in {from_state:?}");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Start, GameAction::Start) => Some(FsmState::Playing),

            (FsmState::Playing, GameAction::BallMissed(winner)) => {
                Some(FsmState::GameOver(winner))
            }

            (FsmState::GameOver(_), GameAction::Restart) => Some(FsmState::Playing),
            (FsmState::GameOver(_), GameAction::Quit) => Some(FsmState::Terminated),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, FsmState::GameOver(_))
    }

    pub fn is_terminated(&self) -> bool {
        self.state == FsmState::Terminated
    }

    /// Winner of the last round, while the game-over screen is up
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            FsmState::GameOver(winner) => Some(winner),
            _ => None,
        }
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
