//! Presentation State Machine
//!
//! Tracks fullscreen requests. The browser may refuse to enter or leave
//! fullscreen; a refusal falls back to the last stable state without
//! surfacing anything to the player.

/// Presentation states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
    Windowed,
    Entering,
    Fullscreen,
    Exiting,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationAction {
    /// Player asked to switch mode
    Toggle,
    /// Browser reports the canvas is now fullscreen
    Entered,
    /// Browser reports fullscreen was left (including via Esc)
    Exited,
    /// Browser refused the pending request
    Rejected,
}

/// Result of a state transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: PresentationState,
    to_state: PresentationState,
    action: PresentationAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> PresentationState {
        self.from_state
    }

    pub fn to_state(&self) -> PresentationState {
        self.to_state
    }

    pub fn action(&self) -> PresentationAction {
        self.action
    }
}

/// Fullscreen Finite State Machine
#[derive(Debug)]
pub struct PresentationFsm {
    state: PresentationState,
}

impl PresentationFsm {
    pub fn new() -> Self {
        Self {
            state: PresentationState::Windowed,
        }
    }

    /// Get current state
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: PresentationAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: PresentationAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: PresentationAction) -> Option<PresentationState> {
        use PresentationAction::*;
        use PresentationState::*;

        match (self.state, action) {
            (Windowed, Toggle) => Some(Entering),
            (Fullscreen, Toggle) => Some(Exiting),

            (Entering, Entered) => Some(Fullscreen),
            (Entering, Rejected) => Some(Windowed),
            // Fullscreen can be left before the enter request settles
            (Entering, Exited) => Some(Windowed),

            (Exiting, Exited) => Some(Windowed),
            (Exiting, Rejected) => Some(Fullscreen),

            // Esc or browser UI leaves fullscreen without a toggle
            (Fullscreen, Exited) => Some(Windowed),

            _ => None,
        }
    }

    /// True while a request is waiting on the browser
    pub fn is_pending(&self) -> bool {
        matches!(
            self.state,
            PresentationState::Entering | PresentationState::Exiting
        )
    }

    pub fn is_fullscreen(&self) -> bool {
        self.state == PresentationState::Fullscreen
    }
}

impl Default for PresentationFsm {
    fn default() -> Self {
        Self::new()
    }
}
