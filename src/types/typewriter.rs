//! Typewriter state: a message carousel typed and deleted one character at a time

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Per-character delays of the typewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    /// Delay between typed characters
    pub type_delay_ms: u64,
    /// Delay between deleted characters
    pub delete_delay_ms: u64,
    /// Pause once a message is fully typed
    pub pause_at_end_ms: u64,
    /// Pause once a message is fully deleted
    pub pause_before_next_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay_ms: 100,
            delete_delay_ms: 50,
            pause_at_end_ms: 2000,
            pause_before_next_ms: 500,
        }
    }
}

/// Position of the typewriter inside its message list
///
/// `char_index` counts characters, not bytes, and always lies within
/// `0..=len(current message)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TypewriterStateRaw")]
pub struct TypewriterState {
    messages: Vec<String>,
    message_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypewriterState {
    pub fn new<I, S>(messages: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            return Err(CoreError::EmptyMessages);
        }
        Ok(Self {
            messages,
            message_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn message_index(&self) -> usize {
        self.message_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn current_message(&self) -> &str {
        &self.messages[self.message_index]
    }

    pub(crate) fn current_len(&self) -> usize {
        self.current_message().chars().count()
    }

    /// First `char_index` characters of the current message
    pub fn rendered(&self) -> String {
        self.current_message().chars().take(self.char_index).collect()
    }

    pub(crate) fn set_char_index(&mut self, char_index: usize) {
        self.char_index = char_index.min(self.current_len());
    }

    pub(crate) fn start_deleting(&mut self) {
        self.deleting = true;
    }

    pub(crate) fn next_message(&mut self) {
        self.deleting = false;
        self.char_index = 0;
        self.message_index = (self.message_index + 1) % self.messages.len();
    }
}

#[derive(Deserialize)]
struct TypewriterStateRaw {
    messages: Vec<String>,
    message_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TryFrom<TypewriterStateRaw> for TypewriterState {
    type Error = CoreError;

    fn try_from(raw: TypewriterStateRaw) -> Result<Self, Self::Error> {
        let Some(message) = raw.messages.get(raw.message_index) else {
            if raw.messages.is_empty() {
                return Err(CoreError::EmptyMessages);
            }
            return Err(CoreError::invalid_state(format!(
                "message index {} past {} messages",
                raw.message_index,
                raw.messages.len()
            )));
        };
        let len = message.chars().count();
        if raw.char_index > len {
            return Err(CoreError::invalid_state(format!(
                "char index {} past message of {} characters",
                raw.char_index, len
            )));
        }
        Ok(Self {
            messages: raw.messages,
            message_index: raw.message_index,
            char_index: raw.char_index,
            deleting: raw.deleting,
        })
    }
}
