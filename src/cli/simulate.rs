//! Timeline replay of the page's scripted behavior
//!
//! Drives a `Session` the way a browser host would and prints every frame
//! with its timestamp. With `realtime` the replay sleeps between frames.

use crate::config::EngineConfig;
use crate::host::{HeroFrame, LoadingFrame, Session};
use crate::storage::{self, JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use crate::types::{ElementKind, RevealAction, RevealDecision, SectionExtent};
use std::path::PathBuf;
use std::time::Duration;

/// Options for the `simulate` command
#[derive(Debug, Clone)]
pub struct SimulateOptions {
    pub config: Option<PathBuf>,
    pub prefs: Option<PathBuf>,
    pub ticks: usize,
    pub realtime: bool,
    pub toggle_theme: bool,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        Self {
            config: None,
            prefs: None,
            ticks: 40,
            realtime: false,
            toggle_theme: false,
        }
    }
}

/// Sections of the demo page, top to bottom
const DEMO_SECTIONS: [(&str, f64); 5] = [
    ("home", 900.0),
    ("about", 700.0),
    ("skills", 800.0),
    ("projects", 1100.0),
    ("contact", 600.0),
];

struct Clock {
    now_ms: u64,
    realtime: bool,
}

impl Clock {
    async fn wait(&mut self, delay_ms: u64) {
        self.now_ms += delay_ms;
        if self.realtime {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }

    fn stamp(&self) -> String {
        format!("[{:>6}ms]", self.now_ms)
    }
}

pub async fn run(options: SimulateOptions) -> anyhow::Result<()> {
    let config = match &options.config {
        Some(path) => EngineConfig::load(path).await?,
        None => EngineConfig::default(),
    };

    let store: Box<dyn PreferenceStore> = match &options.prefs {
        Some(path) => Box::new(JsonFilePreferenceStore::new(path.clone())),
        None => Box::new(MemoryPreferenceStore::new()),
    };
    let theme = storage::load_theme(store.as_ref()).await?;

    let mut session = Session::new(config, theme)?;
    println!("=== vitrina timeline ===");
    println!("theme: {}", session.theme());
    if options.toggle_theme {
        let theme = session.toggle_theme();
        storage::save_theme(store.as_ref(), theme).await?;
        println!("theme toggled to {theme}");
    }
    println!();

    replay_loading(&mut session, options.realtime).await?;
    replay_typewriter(&mut session, options.ticks, options.realtime).await;
    replay_scroll(&mut session)?;
    Ok(())
}

async fn replay_loading(session: &mut Session, realtime: bool) -> anyhow::Result<()> {
    let mut clock = Clock { now_ms: 0, realtime };
    let stats = session.register_hero_stats(vec![50, 120, 5]);
    let avatar = session.register_avatar_stats(vec![95.0, 88.0, 75.0]);

    clock.wait(session.loading_start_delay_ms()).await;
    loop {
        let frame = session.advance_loading()?;
        match &frame {
            LoadingFrame::Progress {
                percent, status, ..
            } => println!("{} loading {:>3}% {}", clock.stamp(), percent, status),
            LoadingFrame::Complete { .. } => println!("{} loading complete", clock.stamp()),
            LoadingFrame::FadeOut { .. } => println!("{} loading screen fading", clock.stamp()),
            LoadingFrame::Hidden => println!("{} loading screen hidden", clock.stamp()),
        }
        match frame.next_delay_ms() {
            Some(delay) => clock.wait(delay).await,
            None => break,
        }
    }

    let hero_start = clock.now_ms;
    while let HeroFrame::Show {
        element,
        next_delay_ms,
    } = session.advance_hero()?
    {
        println!("{} hero    {}", clock.stamp(), element);
        clock.wait(next_delay_ms).await;
    }

    for scheduled in session.hero_followups() {
        let at = hero_start + scheduled.delay_ms;
        let decision = session.on_intersection(scheduled.target, true)?;
        let label = match scheduled.target {
            target if target == stats => "stats",
            target if target == avatar => "avatar",
            _ => "target",
        };
        println!("[{:>6}ms] hero    {} -> {}", at, label, describe(&decision));
    }
    println!();
    Ok(())
}

async fn replay_typewriter(session: &mut Session, ticks: usize, realtime: bool) {
    let mut clock = Clock { now_ms: 0, realtime };
    clock.wait(session.typewriter_start_delay_ms()).await;
    for _ in 0..ticks {
        let frame = session.tick_typewriter();
        println!("{} typing  \"{}\"", clock.stamp(), frame.rendered);
        clock.wait(frame.next_delay_ms).await;
    }
    println!();
}

fn replay_scroll(session: &mut Session) -> anyhow::Result<()> {
    let mut top = 0.0;
    let mut extents = Vec::new();
    for (id, height) in DEMO_SECTIONS {
        extents.push(SectionExtent::new(id, top, height)?);
        top += height;
    }
    session.set_layout(extents)?;
    session.set_floating_count(3);

    let skills = session.register_target(ElementKind::skill_group(vec![95.0, 90.0, 80.0, 70.0]));
    let skills_top = session
        .layout()
        .extents()
        .iter()
        .find(|extent| extent.id().as_str() == "skills")
        .map(|extent| extent.top_offset())
        .unwrap_or_default();

    let mut y = 0.0;
    while y < top {
        let frame = session.on_scroll(y);
        if frame.active_changed {
            let active = frame
                .active_section
                .as_ref()
                .map(|id| id.href())
                .unwrap_or_default();
            println!(
                "scroll {:>6.0}px active {} (header scrolled: {})",
                y, active, frame.header_scrolled
            );
        }
        // Observer fires every time the skills block is on screen
        if y + 600.0 >= skills_top {
            let decision = session.on_intersection(skills, true)?;
            if !decision.is_noop() {
                println!("scroll {:>6.0}px reveal skills -> {}", y, describe(&decision));
            }
        }
        y += 250.0;
    }
    Ok(())
}

fn describe(decision: &RevealDecision) -> String {
    match decision {
        RevealDecision::NoOp => "no-op".to_string(),
        RevealDecision::Reveal(RevealAction::FadeIn) => "fade in".to_string(),
        RevealDecision::Reveal(RevealAction::SkillBars(bars)) => bars
            .iter()
            .map(|bar| format!("{}%@{}ms", bar.target_width_percent, bar.start_delay_ms))
            .collect::<Vec<_>>()
            .join(", "),
        RevealDecision::Reveal(RevealAction::Counters(counters)) => counters
            .iter()
            .map(|counter| format!("0..{} in {}ms", counter.target_value, counter.duration_ms()))
            .collect::<Vec<_>>()
            .join(", "),
    }
}
