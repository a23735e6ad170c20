//! Submission gate state machine

use std::fmt;
use thiserror::Error;

/// Submission states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
}

impl SubmissionState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while {current_state}")]
pub struct InvalidStateTransition {
    pub current_state: SubmissionState,
    pub action: String,
}

/// Tracks whether a transform request is in flight.
///
/// State machine:
///   IDLE -> PENDING (begin)
///   PENDING -> IDLE (finish)
///
/// A second `begin` while pending is rejected, never queued.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    state: SubmissionState,
}

impl SubmissionGate {
    /// Create a new gate in idle state
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    /// Transition from IDLE to PENDING
    pub fn begin(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != SubmissionState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "submit".to_string(),
            });
        }
        self.state = SubmissionState::Pending;
        Ok(())
    }

    /// Transition from PENDING to IDLE
    pub fn finish(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != SubmissionState::Pending {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "finish submission".to_string(),
            });
        }
        self.state = SubmissionState::Idle;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_gate_is_idle() {
        let gate = SubmissionGate::new();
        assert_eq!(gate.state(), SubmissionState::Idle);
        assert!(!gate.is_pending());
    }

    #[test]
    fn begin_from_idle() {
        let mut gate = SubmissionGate::new();
        assert!(gate.begin().is_ok());
        assert!(gate.is_pending());
    }

    #[test]
    fn begin_while_pending_fails() {
        let mut gate = SubmissionGate::new();
        gate.begin().unwrap();

        let err = gate.begin().unwrap_err();
        assert_eq!(err.current_state, SubmissionState::Pending);
        assert!(err.to_string().contains("cannot submit while pending"));
    }

    #[test]
    fn finish_from_idle_fails() {
        let mut gate = SubmissionGate::new();
        let err = gate.finish().unwrap_err();
        assert_eq!(err.current_state, SubmissionState::Idle);
    }

    #[test]
    fn full_cycle() {
        let mut gate = SubmissionGate::new();
        gate.begin().unwrap();
        gate.finish().unwrap();
        assert!(!gate.is_pending());

        gate.begin().unwrap();
        assert!(gate.is_pending());
    }

    #[test]
    fn state_display() {
        assert_eq!(SubmissionState::Idle.to_string(), "idle");
        assert_eq!(SubmissionState::Pending.to_string(), "pending");
    }
}
