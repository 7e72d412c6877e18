//! Reveal targets and the one-shot actions fired for them

use serde::{Deserialize, Serialize};

/// What kind of element a target is, decided once when the host registers it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Plain fade/slide entrance
    Generic,
    /// A group of skill bars, each carrying its `data-skill` level in percent.
    /// `stagger_ms` overrides the configured per-bar delay (avatar stats use a
    /// slower cascade than skill categories).
    SkillGroup {
        levels: Vec<f64>,
        stagger_ms: Option<u64>,
    },
    /// A group of count-up statistics, each carrying its `data-count` target
    StatCounters { targets: Vec<i64> },
}

impl ElementKind {
    pub fn skill_group(levels: Vec<f64>) -> Self {
        Self::SkillGroup {
            levels,
            stagger_ms: None,
        }
    }

    pub fn stat_counters(targets: Vec<i64>) -> Self {
        Self::StatCounters { targets }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Generic => "generic",
            ElementKind::SkillGroup { .. } => "skill_group",
            ElementKind::StatCounters { .. } => "stat_counters",
        }
    }
}

/// An observed element and its at-most-once guard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealTarget {
    kind: ElementKind,
    has_fired_once: bool,
}

impl RevealTarget {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            has_fired_once: false,
        }
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn has_fired_once(&self) -> bool {
        self.has_fired_once
    }

    pub(crate) fn mark_fired(&mut self) {
        self.has_fired_once = true;
    }
}

/// Width interpolation of one skill bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillBarAnimation {
    /// Final width, clamped to `0..=100`
    pub target_width_percent: f64,
    /// Delay from the reveal until this bar starts growing
    pub start_delay_ms: u64,
}

/// Linear count-up of one statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterAnimation {
    pub target_value: u64,
    pub step_interval_ms: u64,
    pub step_count: u32,
}

impl CounterAnimation {
    /// Negative targets clamp to zero and a zero step count is treated as one
    pub fn new(target_value: i64, step_interval_ms: u64, step_count: u32) -> Self {
        Self {
            target_value: target_value.max(0) as u64,
            step_interval_ms,
            step_count: step_count.max(1),
        }
    }

    /// Displayed value after `tick` intervals: `floor(target * tick / steps)`,
    /// pinned to the target from the final tick on
    pub fn value_at(&self, tick: u32) -> u64 {
        if tick >= self.step_count {
            return self.target_value;
        }
        let scaled = u128::from(self.target_value) * u128::from(tick) / u128::from(self.step_count);
        scaled as u64
    }

    /// Values shown on ticks `1..=step_count`
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        (1..=self.step_count).map(|tick| self.value_at(tick))
    }

    /// Total running time of the ramp
    pub fn duration_ms(&self) -> u64 {
        self.step_interval_ms * u64::from(self.step_count)
    }
}

/// Instruction for the host when a target is revealed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RevealAction {
    /// Fade/slide in, nothing else to drive
    FadeIn,
    /// Grow each bar in document order
    SkillBars(Vec<SkillBarAnimation>),
    /// Run each counter ramp
    Counters(Vec<CounterAnimation>),
}

impl RevealAction {
    /// Number of inner animations (zero for a plain fade)
    pub fn len(&self) -> usize {
        match self {
            RevealAction::FadeIn => 0,
            RevealAction::SkillBars(bars) => bars.len(),
            RevealAction::Counters(counters) => counters.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of a visibility signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RevealDecision {
    Reveal(RevealAction),
    NoOp,
}

impl RevealDecision {
    pub fn is_noop(&self) -> bool {
        matches!(self, RevealDecision::NoOp)
    }

    pub fn action(&self) -> Option<&RevealAction> {
        match self {
            RevealDecision::Reveal(action) => Some(action),
            RevealDecision::NoOp => None,
        }
    }
}
