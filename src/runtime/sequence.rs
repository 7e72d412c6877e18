//! Step sequencer for cascading timed steps

use super::debug;
use crate::error::CoreError;
use crate::types::step::{Advance, SequenceState, StepOutput};

/// Emit the step under the cursor and move past it
///
/// The caller applies the returned step and waits that step's `delay_ms`
/// before advancing again. Once every step has been emitted the next call
/// returns `Advance::Done` and marks the state finished; advancing a finished
/// state is a driver bug and fails with `ExhaustedSequence`.
pub fn advance(mut state: SequenceState) -> Result<(SequenceState, Advance), CoreError> {
    if state.is_finished() {
        log::warn!(
            target: debug::SEQUENCE,
            "[Sequence] advance called on finished sequence of {} steps",
            state.steps().len()
        );
        return Err(CoreError::exhausted(state.steps().len()));
    }

    let index = state.cursor();
    let Some(step) = state.current().cloned() else {
        state.finish();
        log::debug!(
            target: debug::SEQUENCE,
            "[Sequence] Done after {} steps",
            state.steps().len()
        );
        return Ok((state, Advance::Done));
    };

    log::trace!(
        target: debug::SEQUENCE,
        "[Sequence] Step {} -> {} ({}) next in {}ms",
        index,
        step.threshold_value,
        step.label,
        step.delay_ms
    );
    state.bump();
    Ok((state, Advance::Step(StepOutput { index, step })))
}

/// Total time from the first step until `Done` can be requested
pub fn total_delay_ms(state: &SequenceState) -> u64 {
    state.steps().iter().map(|step| step.delay_ms).sum()
}
