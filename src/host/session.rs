//! Headless presentation session
//!
//! `Session` owns every piece of page state the original script kept in
//! globals (theme, loading flag, konami buffer, menu state) and wires the
//! engines together. It never sleeps or touches a real document: each call
//! returns a frame describing what to render and how long to wait.

use crate::config::EngineConfig;
use crate::error::CoreError;
use crate::host::debounce::Debouncer;
use crate::host::form::{ContactForm, FormStatus};
use crate::host::konami::KonamiDetector;
use crate::host::navigation::{AccessibilityFlags, NavState};
use crate::host::notification::{Notification, NotificationId, Notifications};
use crate::runtime::{self, debug, Parallax, TypewriterFrame};
use crate::types::{
    Advance, ElementKind, RevealDecision, RevealTarget, SectionExtent, SectionId, SectionLayout,
    SequenceState, Step, Theme, TypewriterState,
};

/// Handle to a registered reveal target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(usize);

impl TargetId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Lifecycle of the loading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Waiting for the initial delay
    Pending,
    /// Progress steps are running
    Running,
    /// All steps shown, waiting before the fade
    Finishing,
    /// Loading screen fading out
    Fading,
    /// Loading screen gone, page interactive
    Done,
}

/// One frame of the loading screen
#[derive(Debug, Clone, PartialEq)]
pub enum LoadingFrame {
    /// Move the progress bar and status text
    Progress {
        index: usize,
        percent: f64,
        status: String,
        next_delay_ms: u64,
    },
    /// Every step shown; start the fade after the delay
    Complete { next_delay_ms: u64 },
    /// Fade the screen out over `next_delay_ms`
    FadeOut { next_delay_ms: u64 },
    /// Remove the screen and start the hero entrance
    Hidden,
}

impl LoadingFrame {
    /// Delay before the next `advance_loading` call, `None` once hidden
    pub fn next_delay_ms(&self) -> Option<u64> {
        match self {
            LoadingFrame::Progress { next_delay_ms, .. }
            | LoadingFrame::Complete { next_delay_ms }
            | LoadingFrame::FadeOut { next_delay_ms } => Some(*next_delay_ms),
            LoadingFrame::Hidden => None,
        }
    }
}

/// One frame of the hero entrance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroFrame {
    Show { element: String, next_delay_ms: u64 },
    Done,
}

/// A reveal the host should trigger after a delay from hero start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub delay_ms: u64,
    pub target: TargetId,
}

/// Result of a (debounced) scroll
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    pub header_scrolled: bool,
    /// Highlighted section after this scroll
    pub active_section: Option<SectionId>,
    /// True if the highlight moved
    pub active_changed: bool,
    pub parallax: Parallax,
}

/// Result of a navigation link click
#[derive(Debug, Clone, PartialEq)]
pub struct NavigateFrame {
    /// Offset to smooth-scroll to
    pub scroll_to: f64,
    pub nav_closed: bool,
}

/// Result of a (debounced) resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeFrame {
    pub viewport_width: f64,
    pub nav_closed: bool,
}

/// Result of a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Set when the key completed the konami code: how long the effect runs
    pub easter_egg_ms: Option<u64>,
    pub nav_closed: bool,
}

pub struct Session {
    config: EngineConfig,
    theme: Theme,
    loading_phase: LoadingPhase,
    loading: SequenceState,
    hero: SequenceState,
    typewriter: TypewriterState,
    layout: SectionLayout,
    header_height: f64,
    floating_count: usize,
    targets: Vec<RevealTarget>,
    hero_stats: Option<TargetId>,
    avatar_stats: Option<TargetId>,
    nav: NavState,
    konami: KonamiDetector,
    form: ContactForm,
    notifications: Notifications,
    accessibility: AccessibilityFlags,
    scroll_debounce: Debouncer,
    pending_scroll: Option<f64>,
    resize_debounce: Debouncer,
    pending_width: Option<f64>,
}

impl Session {
    pub fn new(config: EngineConfig, theme: Theme) -> Result<Self, CoreError> {
        let typewriter = TypewriterState::new(config.typewriter.messages.clone())?;
        let loading = SequenceState::new(config.loading.steps.clone());
        let hero = SequenceState::new(
            config
                .hero
                .elements
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    Step::new(index as f64, element.clone(), config.hero.stagger_ms)
                })
                .collect(),
        );

        log::info!(
            target: debug::SESSION,
            "[Session] Created with theme {} and {} loading steps",
            theme,
            config.loading.steps.len()
        );

        Ok(Self {
            theme,
            loading_phase: LoadingPhase::Pending,
            loading,
            hero,
            typewriter,
            layout: SectionLayout::default(),
            header_height: config.tracker.header_height,
            floating_count: 0,
            targets: Vec::new(),
            hero_stats: None,
            avatar_stats: None,
            nav: NavState::default(),
            konami: KonamiDetector::new(),
            form: ContactForm::new(config.form.clone()),
            notifications: Notifications::new(config.effects),
            accessibility: AccessibilityFlags::default(),
            scroll_debounce: Debouncer::new(config.debounce.scroll_ms),
            pending_scroll: None,
            resize_debounce: Debouncer::new(config.debounce.resize_ms),
            pending_width: None,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // --- theme ---

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme; the caller persists the returned value
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        log::debug!(target: debug::SESSION, "[Session] Theme -> {}", self.theme);
        self.theme
    }

    // --- loading screen ---

    /// Record how long the page took to load; true if it was slow
    pub fn report_load_time(&self, load_ms: u64) -> bool {
        log::info!(target: debug::SESSION, "[Session] Page loaded in {}ms", load_ms);
        let slow = load_ms > self.config.effects.slow_load_threshold_ms;
        if slow {
            log::warn!(target: debug::SESSION, "[Session] Slow page load detected");
        }
        slow
    }

    pub fn loading_phase(&self) -> LoadingPhase {
        self.loading_phase
    }

    pub fn is_loading(&self) -> bool {
        self.loading_phase != LoadingPhase::Done
    }

    /// Decorative particles are only spawned while the loading screen is up
    pub fn should_spawn_particle(&self) -> bool {
        self.is_loading()
    }

    pub fn particle_interval_ms(&self) -> u64 {
        self.config.loading.particle_interval_ms
    }

    /// Delay before the first `advance_loading` call
    pub fn loading_start_delay_ms(&self) -> u64 {
        self.config.loading.initial_delay_ms
    }

    pub fn advance_loading(&mut self) -> Result<LoadingFrame, CoreError> {
        match self.loading_phase {
            LoadingPhase::Pending | LoadingPhase::Running => {
                let (next, outcome) = runtime::advance(std::mem::take(&mut self.loading))?;
                self.loading = next;
                match outcome {
                    Advance::Step(output) => {
                        self.loading_phase = LoadingPhase::Running;
                        Ok(LoadingFrame::Progress {
                            index: output.index,
                            percent: output.step.threshold_value,
                            status: output.step.label,
                            next_delay_ms: output.step.delay_ms,
                        })
                    }
                    Advance::Done => {
                        self.loading_phase = LoadingPhase::Finishing;
                        Ok(LoadingFrame::Complete {
                            next_delay_ms: self.config.loading.hide_delay_ms,
                        })
                    }
                }
            }
            LoadingPhase::Finishing => {
                self.loading_phase = LoadingPhase::Fading;
                Ok(LoadingFrame::FadeOut {
                    next_delay_ms: self.config.loading.fade_ms,
                })
            }
            LoadingPhase::Fading => {
                self.loading_phase = LoadingPhase::Done;
                log::info!(target: debug::SESSION, "[Session] Loading screen hidden");
                Ok(LoadingFrame::Hidden)
            }
            LoadingPhase::Done => Err(CoreError::exhausted(self.loading.steps().len())),
        }
    }

    // --- hero entrance ---

    pub fn advance_hero(&mut self) -> Result<HeroFrame, CoreError> {
        let (next, outcome) = runtime::advance(std::mem::take(&mut self.hero))?;
        self.hero = next;
        Ok(match outcome {
            Advance::Step(output) => HeroFrame::Show {
                element: output.step.label,
                next_delay_ms: output.step.delay_ms,
            },
            Advance::Done => HeroFrame::Done,
        })
    }

    /// Register the hero statistics, revealed on a timer rather than by scrolling
    pub fn register_hero_stats(&mut self, targets: Vec<i64>) -> TargetId {
        let id = self.register_target(ElementKind::stat_counters(targets));
        self.hero_stats = Some(id);
        id
    }

    /// Register the avatar stat bars, which use the slower avatar stagger
    pub fn register_avatar_stats(&mut self, levels: Vec<f64>) -> TargetId {
        let id = self.register_target(ElementKind::SkillGroup {
            levels,
            stagger_ms: Some(self.config.reveal.avatar_stagger_ms),
        });
        self.avatar_stats = Some(id);
        id
    }

    /// Timed reveals that follow the hero entrance
    pub fn hero_followups(&self) -> Vec<ScheduledReveal> {
        let hero = &self.config.hero;
        [
            (hero.counters_delay_ms, self.hero_stats),
            (hero.avatar_delay_ms, self.avatar_stats),
        ]
        .into_iter()
        .filter_map(|(delay_ms, target)| target.map(|target| ScheduledReveal { delay_ms, target }))
        .collect()
    }

    // --- typewriter ---

    pub fn typewriter_start_delay_ms(&self) -> u64 {
        self.config.typewriter.start_delay_ms
    }

    pub fn tick_typewriter(&mut self) -> TypewriterFrame {
        runtime::typewriter::frame(&mut self.typewriter, &self.config.typewriter.timing)
    }

    pub fn typewriter(&self) -> &TypewriterState {
        &self.typewriter
    }

    // --- layout and scrolling ---

    /// Replace the layout snapshot after a (re)measure
    pub fn set_layout(&mut self, extents: Vec<SectionExtent>) -> Result<(), CoreError> {
        self.layout = SectionLayout::new(extents)?;
        log::debug!(
            target: debug::SECTION,
            "[Session] Layout updated with {} sections",
            self.layout.len()
        );
        Ok(())
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn set_header_height(&mut self, header_height: f64) {
        self.header_height = header_height;
    }

    pub fn set_floating_count(&mut self, count: usize) {
        self.floating_count = count;
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.nav.active()
    }

    /// Handle a scroll sample immediately
    ///
    /// When no section contains the effective position the previous
    /// highlight is kept.
    pub fn on_scroll(&mut self, raw_scroll_y: f64) -> ScrollFrame {
        let y = runtime::effective_scroll_y(
            raw_scroll_y,
            self.header_height,
            self.config.tracker.lookahead_px,
        );
        let active_changed = match runtime::active_section(self.layout.extents(), y) {
            Some(id) => self.nav.activate(id),
            None => false,
        };

        ScrollFrame {
            header_scrolled: runtime::header_scrolled(
                raw_scroll_y,
                self.config.header.scrolled_threshold_px,
            ),
            active_section: self.nav.active().cloned(),
            active_changed,
            parallax: runtime::parallax(raw_scroll_y, self.floating_count),
        }
    }

    /// Record a raw scroll event for the debounced handler
    pub fn queue_scroll(&mut self, now_ms: u64, raw_scroll_y: f64) {
        self.pending_scroll = Some(raw_scroll_y);
        self.scroll_debounce.trigger(now_ms);
    }

    /// Run the scroll handler once the scroll debounce window has passed
    pub fn poll_scroll(&mut self, now_ms: u64) -> Option<ScrollFrame> {
        if !self.scroll_debounce.poll(now_ms) {
            return None;
        }
        let y = self.pending_scroll.take()?;
        Some(self.on_scroll(y))
    }

    /// Record a raw resize event for the debounced handler
    pub fn queue_resize(&mut self, now_ms: u64, viewport_width: f64) {
        self.pending_width = Some(viewport_width);
        self.resize_debounce.trigger(now_ms);
    }

    /// Run the resize handler once the resize debounce window has passed
    pub fn poll_resize(&mut self, now_ms: u64) -> Option<ResizeFrame> {
        if !self.resize_debounce.poll(now_ms) {
            return None;
        }
        let viewport_width = self.pending_width.take()?;
        let nav_closed =
            viewport_width > self.config.header.nav_collapse_width_px && self.nav.close();
        Some(ResizeFrame {
            viewport_width,
            nav_closed,
        })
    }

    // --- navigation ---

    pub fn toggle_nav(&mut self) -> bool {
        self.nav.toggle()
    }

    pub fn is_nav_open(&self) -> bool {
        self.nav.is_open()
    }

    /// A click anywhere outside the menu and its toggle closes the menu
    pub fn on_outside_click(&mut self) -> bool {
        self.nav.close()
    }

    /// Navigation link click: scroll below the header and highlight the link
    pub fn navigate_to(&mut self, id: &SectionId) -> Option<NavigateFrame> {
        let Some(extent) = self.layout.get(id) else {
            log::debug!(target: debug::SESSION, "[Session] No section '{}' to navigate to", id);
            return None;
        };
        let scroll_to = runtime::scroll_target(extent, self.header_height);
        self.nav.activate(id);
        Some(NavigateFrame {
            scroll_to,
            nav_closed: self.nav.close(),
        })
    }

    // --- reveals ---

    pub fn register_target(&mut self, kind: ElementKind) -> TargetId {
        let id = TargetId(self.targets.len());
        log::trace!(
            target: debug::REVEAL,
            "[Session] Registered {} target {}",
            kind.name(),
            id.0
        );
        self.targets.push(RevealTarget::new(kind));
        id
    }

    pub fn target(&self, id: TargetId) -> Option<&RevealTarget> {
        self.targets.get(id.0)
    }

    /// Intersection observer callback for a registered target
    pub fn on_intersection(
        &mut self,
        id: TargetId,
        is_intersecting: bool,
    ) -> Result<RevealDecision, CoreError> {
        let target = self
            .targets
            .get_mut(id.0)
            .ok_or(CoreError::UnknownTarget { id: id.0 })?;
        if !is_intersecting {
            return Ok(RevealDecision::NoOp);
        }
        Ok(runtime::on_visible_with_config(target, &self.config.reveal))
    }

    // --- keyboard, pointer, accessibility ---

    pub fn on_key(&mut self, key: &str, code: &str) -> KeyOutcome {
        let mut outcome = KeyOutcome::default();
        match key {
            "Escape" => outcome.nav_closed = self.nav.close(),
            "Tab" => self.accessibility.keyboard_navigation = true,
            _ => {}
        }
        if self.konami.push(code) {
            log::info!(target: debug::SESSION, "[Session] Easter egg activated");
            outcome.easter_egg_ms = Some(self.config.effects.easter_egg_ms);
        }
        outcome
    }

    pub fn on_mouse_down(&mut self) {
        self.accessibility.keyboard_navigation = false;
    }

    pub fn set_accessibility(&mut self, reduced_motion: bool, high_contrast: bool) {
        let keyboard_navigation = self.accessibility.keyboard_navigation;
        self.accessibility = AccessibilityFlags::new(reduced_motion, high_contrast);
        self.accessibility.keyboard_navigation = keyboard_navigation;
    }

    pub fn accessibility(&self) -> AccessibilityFlags {
        self.accessibility
    }

    // --- contact form ---

    pub fn submit_form(&mut self, now_ms: u64) -> bool {
        self.form.submit(now_ms)
    }

    pub fn fail_form(&mut self, now_ms: u64, reason: &str) -> bool {
        self.form.fail(now_ms, reason)
    }

    pub fn poll_form(&mut self, now_ms: u64) -> Option<FormStatus> {
        self.form.poll(now_ms)
    }

    pub fn form_status(&self) -> &FormStatus {
        self.form.status()
    }

    // --- notifications ---

    pub fn show_message(
        &mut self,
        message: &str,
        kind: Option<&str>,
        now_ms: u64,
    ) -> NotificationId {
        self.notifications.show(message, kind, now_ms)
    }

    pub fn poll_notifications(&mut self, now_ms: u64) -> Vec<Notification> {
        self.notifications.poll(now_ms)
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.active()
    }
}
