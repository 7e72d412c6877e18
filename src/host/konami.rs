//! Konami code detection over a rolling window of key codes

use std::collections::VecDeque;

/// Up, up, down, down, left, right, left, right, B, A
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Remembers the last ten key codes
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    buffer: VecDeque<String>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key code; true when the last ten codes spell the sequence
    pub fn push(&mut self, code: &str) -> bool {
        self.buffer.push_back(code.to_string());
        if self.buffer.len() > KONAMI_SEQUENCE.len() {
            self.buffer.pop_front();
        }
        self.buffer.len() == KONAMI_SEQUENCE.len()
            && self.buffer.iter().zip(KONAMI_SEQUENCE).all(|(seen, want)| seen.as_str() == want)
    }
}
