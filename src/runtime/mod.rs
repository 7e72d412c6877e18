//! Engines driving the page's timed and scroll-driven behavior
//!
//! Every engine is a plain function over explicit state: the caller owns the
//! state, the timers and the observers, and applies what comes back.

pub mod debug;
pub mod reveal;
pub mod section;
pub mod sequence;
pub mod typewriter;


pub use reveal::{on_visible, on_visible_with_config, skill_bars_with_stagger};
pub use section::{
    active_section, effective_scroll_y, header_scrolled, parallax, scroll_target, Parallax,
};
pub use sequence::advance;
pub use typewriter::{tick, tick_mut, tick_with_timing, TypewriterFrame};
