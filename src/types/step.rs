//! Timed step sequences (loading progress, hero stagger)

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// A single timed step of a sequence
///
/// `delay_ms` is how long the caller waits after applying this step before
/// asking for the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Value the step drives the observable to (e.g. progress percent)
    pub threshold_value: f64,
    /// Status text shown while this step is current
    pub label: String,
    /// Delay before the next step may run
    pub delay_ms: u64,
}

impl Step {
    pub fn new(threshold_value: f64, label: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            threshold_value,
            label: label.into(),
            delay_ms,
        }
    }
}

/// Cursor over an ordered, immutable list of steps
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SequenceStateRaw")]
pub struct SequenceState {
    steps: Vec<Step>,
    cursor: usize,
    finished: bool,
}

impl SequenceState {
    /// Start a sequence at its first step
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            cursor: 0,
            finished: false,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Index of the next step to be emitted
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once `Done` has been returned
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Steps not yet emitted
    pub fn remaining(&self) -> usize {
        self.steps.len().saturating_sub(self.cursor)
    }

    pub(crate) fn current(&self) -> Option<&Step> {
        self.steps.get(self.cursor)
    }

    pub(crate) fn bump(&mut self) {
        if self.cursor < self.steps.len() {
            self.cursor += 1;
        }
    }

    pub(crate) fn finish(&mut self) {
        self.finished = true;
    }
}

#[derive(Deserialize)]
struct SequenceStateRaw {
    steps: Vec<Step>,
    cursor: usize,
    finished: bool,
}

impl TryFrom<SequenceStateRaw> for SequenceState {
    type Error = CoreError;

    fn try_from(raw: SequenceStateRaw) -> Result<Self, Self::Error> {
        if raw.cursor > raw.steps.len() {
            return Err(CoreError::invalid_state(format!(
                "sequence cursor {} past {} steps",
                raw.cursor,
                raw.steps.len()
            )));
        }
        if raw.finished && raw.cursor != raw.steps.len() {
            return Err(CoreError::invalid_state(format!(
                "sequence finished at cursor {} of {} steps",
                raw.cursor,
                raw.steps.len()
            )));
        }
        Ok(Self {
            steps: raw.steps,
            cursor: raw.cursor,
            finished: raw.finished,
        })
    }
}

/// A step handed back to the caller together with its position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutput {
    pub index: usize,
    pub step: Step,
}

/// Result of advancing a sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Advance {
    /// Apply this step, then wait `step.delay_ms`
    Step(StepOutput),
    /// Every step has been emitted
    Done,
}

impl Advance {
    pub fn is_done(&self) -> bool {
        matches!(self, Advance::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialized_state_keeps_cursor_in_bounds() {
        let json = r#"{"steps":[],"cursor":5,"finished":false}"#;
        let err = serde_json::from_str::<SequenceState>(json).unwrap_err();
        assert!(err.to_string().contains("cursor 5 past 0 steps"));
    }

    #[test]
    fn deserialized_state_cannot_finish_early() {
        let json = r#"{
            "steps": [{ "threshold_value": 1.0, "label": "a", "delay_ms": 1 }],
            "cursor": 0,
            "finished": true
        }"#;
        assert!(serde_json::from_str::<SequenceState>(json).is_err());
    }

    #[test]
    fn serialized_state_restores_position() {
        let mut state = SequenceState::new(vec![
            Step::new(50.0, "half", 10),
            Step::new(100.0, "done", 20),
        ]);
        state.bump();

        let json = serde_json::to_string(&state).unwrap();
        let restored: SequenceState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.remaining(), 1);
    }
}
