//! Typewriter carousel tick function

use super::debug;
use crate::types::typewriter::{TypewriterState, TypewriterTiming};

/// One frame of the typewriter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterFrame {
    /// Text to display after this tick
    pub rendered: String,
    /// Delay before the next tick
    pub next_delay_ms: u64,
}

/// Advance the typewriter by one character with the default timing
pub fn tick(state: TypewriterState) -> (TypewriterState, String, u64) {
    tick_with_timing(state, &TypewriterTiming::default())
}

/// Advance the typewriter by one character
///
/// While typing, one more character is shown; reaching the end of the message
/// flips to deleting and returns the long end pause. While deleting, one
/// character is removed; reaching zero moves to the next message (wrapping)
/// and returns the pause before it.
pub fn tick_with_timing(
    mut state: TypewriterState,
    timing: &TypewriterTiming,
) -> (TypewriterState, String, u64) {
    let (rendered, delay) = tick_mut(&mut state, timing);
    (state, rendered, delay)
}

/// In-place form of [`tick_with_timing`] for callers that keep the state
pub fn tick_mut(state: &mut TypewriterState, timing: &TypewriterTiming) -> (String, u64) {
    let len = state.current_len();

    if state.is_deleting() {
        let next = state.char_index().saturating_sub(1);
        state.set_char_index(next);
    } else {
        let next = state.char_index() + 1;
        state.set_char_index(next);
    }

    let rendered = state.rendered();
    let mut delay = if state.is_deleting() {
        timing.delete_delay_ms
    } else {
        timing.type_delay_ms
    };

    if !state.is_deleting() && state.char_index() == len {
        log::trace!(
            target: debug::TYPEWRITER,
            "[Typewriter] Message {} fully typed",
            state.message_index()
        );
        state.start_deleting();
        delay = timing.pause_at_end_ms;
    } else if state.is_deleting() && state.char_index() == 0 {
        state.next_message();
        log::trace!(
            target: debug::TYPEWRITER,
            "[Typewriter] Moving to message {}",
            state.message_index()
        );
        delay = timing.pause_before_next_ms;
    }

    (rendered, delay)
}

/// Same as [`tick_mut`], packaged as a frame
pub fn frame(state: &mut TypewriterState, timing: &TypewriterTiming) -> TypewriterFrame {
    let (rendered, next_delay_ms) = tick_mut(state, timing);
    TypewriterFrame {
        rendered,
        next_delay_ms,
    }
}
