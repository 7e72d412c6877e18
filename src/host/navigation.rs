//! Navigation menu and accessibility flags

use crate::types::section::SectionId;

/// Mobile navigation menu and the highlighted link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
    active: Option<SectionId>,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu; true if it was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Highlight `id`; true if the highlight moved
    pub fn activate(&mut self, id: &SectionId) -> bool {
        if self.active.as_ref() == Some(id) {
            return false;
        }
        self.active = Some(id.clone());
        true
    }
}

/// User accessibility preferences and the keyboard-navigation outline flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessibilityFlags {
    /// Focus outlines shown after Tab, hidden again on mouse use
    pub keyboard_navigation: bool,
    pub reduced_motion: bool,
    pub high_contrast: bool,
}

impl AccessibilityFlags {
    pub fn new(reduced_motion: bool, high_contrast: bool) -> Self {
        Self {
            keyboard_navigation: false,
            reduced_motion,
            high_contrast,
        }
    }
}
