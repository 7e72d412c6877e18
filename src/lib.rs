//! # vitrina
//!
//! The timing and scroll logic of a single-page portfolio, written as plain
//! functions over explicit state so it can run (and be tested) without a
//! browser. A host owns the document, the timers and the observers; it feeds
//! events in and applies the frames that come back.
//!
//! The library provides both the individual engines and a ready-made
//! `Session` that wires them together.
//!
//! ## Quick Start
//!
//! ```rust
//! use vitrina::{advance, active_section, on_visible, tick};
//! use vitrina::types::{
//!     Advance, ElementKind, RevealTarget, SectionExtent, SequenceState, Step, TypewriterState,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Loading bar: apply each step, then wait its delay
//! let mut loading = SequenceState::new(vec![
//!     Step::new(50.0, "Half way", 300),
//!     Step::new(100.0, "Ready", 500),
//! ]);
//! loop {
//!     let (next, outcome) = advance(loading)?;
//!     loading = next;
//!     match outcome {
//!         Advance::Step(output) => {
//!             println!("{}% {}", output.step.threshold_value, output.step.label)
//!         }
//!         Advance::Done => break,
//!     }
//! }
//!
//! // Typewriter: one character per tick
//! let typing = TypewriterState::new(["Hola"])?;
//! let (_typing, text, delay) = tick(typing);
//! assert_eq!((text.as_str(), delay), ("H", 100));
//!
//! // Scroll highlighting
//! let extents = vec![
//!     SectionExtent::new("home", 0.0, 800.0)?,
//!     SectionExtent::new("about", 800.0, 600.0)?,
//! ];
//! assert_eq!(active_section(&extents, 900.0).map(|id| id.as_str()), Some("about"));
//!
//! // Reveal fires once per element
//! let mut skills = RevealTarget::new(ElementKind::skill_group(vec![90.0, 75.0]));
//! assert!(!on_visible(&mut skills).is_noop());
//! assert!(on_visible(&mut skills).is_noop());
//! # Ok(())
//! # }
//! ```
//!
//! ## Driving a whole page
//!
//! ```rust
//! use vitrina::{EngineConfig, Session, Theme};
//! use vitrina::host::LoadingFrame;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::new(EngineConfig::default(), Theme::Dark)?;
//! while let Some(delay) = session.advance_loading()?.next_delay_ms() {
//!     // a real host would schedule the next call `delay` ms from now
//!     let _ = delay;
//! }
//! assert!(!session.is_loading());
//! # let _ = LoadingFrame::Hidden;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod runtime;
pub mod storage;
pub mod types;

pub use config::EngineConfig;
pub use error::CoreError;
pub use host::{Session, TargetId};
pub use runtime::{active_section, advance, on_visible, tick};
pub use storage::{load_theme, save_theme, PreferenceStore};
pub use types::{RevealAction, RevealDecision, SectionId, Theme};
