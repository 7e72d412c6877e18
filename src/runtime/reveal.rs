//! One-shot reveal decisions for observed elements

use super::debug;
use crate::config::RevealConfig;
use crate::types::reveal::{
    CounterAnimation, ElementKind, RevealAction, RevealDecision, RevealTarget, SkillBarAnimation,
};

/// Decide what to do when `target` becomes visible, with the default timings
pub fn on_visible(target: &mut RevealTarget) -> RevealDecision {
    on_visible_with_config(target, &RevealConfig::default())
}

/// Decide what to do when `target` becomes visible
///
/// The first call marks the target as fired and returns its action; every
/// later call is a no-op and leaves the target untouched.
pub fn on_visible_with_config(target: &mut RevealTarget, config: &RevealConfig) -> RevealDecision {
    if target.has_fired_once() {
        log::trace!(
            target: debug::REVEAL,
            "[Reveal] {} already revealed, ignoring",
            target.kind().name()
        );
        return RevealDecision::NoOp;
    }
    target.mark_fired();

    let action = build_action(target.kind(), config);
    log::debug!(
        target: debug::REVEAL,
        "[Reveal] {} revealed with {} animations",
        target.kind().name(),
        action.len()
    );
    RevealDecision::Reveal(action)
}

fn build_action(kind: &ElementKind, config: &RevealConfig) -> RevealAction {
    match kind {
        ElementKind::Generic => RevealAction::FadeIn,
        ElementKind::SkillGroup { levels, stagger_ms } => {
            let stagger = stagger_ms.unwrap_or(config.skill_stagger_ms);
            RevealAction::SkillBars(skill_bars_with_stagger(levels, stagger))
        }
        ElementKind::StatCounters { targets } => RevealAction::Counters(
            targets
                .iter()
                .map(|&target| {
                    CounterAnimation::new(target, config.counter_interval_ms, config.counter_steps)
                })
                .collect(),
        ),
    }
}

/// Bar animations in document order, the `n`th starting `n * stagger_ms` in
pub fn skill_bars_with_stagger(levels: &[f64], stagger_ms: u64) -> Vec<SkillBarAnimation> {
    levels
        .iter()
        .enumerate()
        .map(|(index, &level)| SkillBarAnimation {
            target_width_percent: clamp_percent(level),
            start_delay_ms: index as u64 * stagger_ms,
        })
        .collect()
}

fn clamp_percent(level: f64) -> f64 {
    if level.is_nan() {
        log::warn!(target: debug::REVEAL, "[Reveal] NaN skill level treated as 0");
        return 0.0;
    }
    level.clamp(0.0, 100.0)
}
