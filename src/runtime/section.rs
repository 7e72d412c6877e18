//! Active section detection from the scroll position

use super::debug;
use crate::types::section::{SectionExtent, SectionId};

/// Scroll offset adjusted so a section activates slightly before it reaches
/// the top of the viewport
pub fn effective_scroll_y(raw_scroll_y: f64, header_height: f64, lookahead_px: f64) -> f64 {
    raw_scroll_y + header_height + lookahead_px
}

/// First extent, in the given order, whose half-open range contains `y`
///
/// Overlapping extents resolve to the earliest one. Returns `None` above the
/// first section and below the last.
pub fn active_section(extents: &[SectionExtent], effective_scroll_y: f64) -> Option<&SectionId> {
    let active = extents
        .iter()
        .find(|extent| extent.contains(effective_scroll_y))
        .map(SectionExtent::id);

    log::trace!(
        target: debug::SECTION,
        "[Section] y={} -> {:?}",
        effective_scroll_y,
        active.map(SectionId::as_str)
    );
    active
}

/// Scroll offset that puts `extent` right below a header of `header_height`
pub fn scroll_target(extent: &SectionExtent, header_height: f64) -> f64 {
    extent.top_offset() - header_height
}

/// Whether the header should use its compact "scrolled" style
pub fn header_scrolled(raw_scroll_y: f64, threshold_px: f64) -> bool {
    raw_scroll_y > threshold_px
}

/// Parallax offsets for the hero background and its floating code snippets
#[derive(Debug, Clone, PartialEq)]
pub struct Parallax {
    /// Vertical translation of the hero background
    pub background_y: f64,
    /// `(translate_y, rotate_deg)` for each floating element, in order
    pub floating: Vec<(f64, f64)>,
}

pub fn parallax(raw_scroll_y: f64, floating_count: usize) -> Parallax {
    let floating = (0..floating_count)
        .map(|index| {
            let speed = 0.2 + index as f64 * 0.1;
            (raw_scroll_y * speed, raw_scroll_y * 0.1)
        })
        .collect();
    Parallax {
        background_y: raw_scroll_y * 0.5,
        floating,
    }
}
