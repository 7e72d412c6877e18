//! Core types for the vitrina library
//!
//! This module contains the state and output types shared by the engines:
//! - Step: timed sequences for the loading bar and hero stagger
//! - Typewriter: message carousel state and per-character timing
//! - Section: layout snapshot for scroll-driven navigation
//! - Reveal: observed targets and the one-shot actions they fire
//! - Theme: the persisted color preference

pub mod reveal;
pub mod section;
pub mod step;
pub mod theme;
pub mod typewriter;

pub use reveal::{
    CounterAnimation, ElementKind, RevealAction, RevealDecision, RevealTarget, SkillBarAnimation,
};
pub use section::{SectionExtent, SectionId, SectionLayout};
pub use step::{Advance, SequenceState, Step, StepOutput};
pub use theme::Theme;
pub use typewriter::{TypewriterState, TypewriterTiming};
