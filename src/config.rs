//! Engine configuration
//!
//! Every section has defaults matching the portfolio's original timings, so a
//! partial JSON document only needs to name what it changes.

use crate::types::{Step, TypewriterTiming};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Loading screen sequence
    pub loading: LoadingConfig,
    /// Hero element stagger after the loading screen hides
    pub hero: HeroConfig,
    /// Typewriter carousel
    pub typewriter: TypewriterConfig,
    /// Active section detection
    pub tracker: TrackerConfig,
    /// Reveal animations
    pub reveal: RevealConfig,
    /// Header and navigation menu
    pub header: HeaderConfig,
    /// Input rate limiting
    pub debounce: DebounceConfig,
    /// Simulated contact form
    pub form: FormConfig,
    /// Notifications, easter egg and load-time monitoring
    pub effects: EffectsConfig,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let config = Self::from_json(&json)?;
        log::debug!(
            target: crate::runtime::debug::STORAGE,
            "[Config] Loaded configuration from {}",
            path.display()
        );
        Ok(config)
    }
}

/// Loading screen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Delay before the first step
    pub initial_delay_ms: u64,
    /// Progress steps, in order
    pub steps: Vec<Step>,
    /// Delay after the last step before the screen fades
    pub hide_delay_ms: u64,
    /// Fade-out duration of the loading screen
    pub fade_ms: u64,
    /// Interval between decorative particles while loading
    pub particle_interval_ms: u64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 500,
            steps: vec![
                Step::new(15.0, "Cargando interfaz...", 300),
                Step::new(30.0, "Inicializando sistemas...", 500),
                Step::new(50.0, "Compilando proyectos...", 400),
                Step::new(70.0, "Configurando skills...", 600),
                Step::new(85.0, "Preparando contacto...", 300),
                Step::new(100.0, "Sistema listo!", 500),
            ],
            hide_delay_ms: 800,
            fade_ms: 500,
            particle_interval_ms: 200,
        }
    }
}

/// Hero entrance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Hero elements revealed in order
    pub elements: Vec<String>,
    /// Delay between consecutive hero elements
    pub stagger_ms: u64,
    /// Delay from hero start until the hero counters run
    pub counters_delay_ms: u64,
    /// Delay from hero start until the avatar stats fill
    pub avatar_delay_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            elements: [
                "hero-greeting",
                "hero-title",
                "hero-description",
                "hero-stats",
                "hero-buttons",
                "avatar-container",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            stagger_ms: 200,
            counters_delay_ms: 1000,
            avatar_delay_ms: 1500,
        }
    }
}

/// Typewriter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Messages cycled through, in order
    pub messages: Vec<String>,
    /// Delay before the first character
    pub start_delay_ms: u64,
    /// Per-character delays
    #[serde(flatten)]
    pub timing: TypewriterTiming,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            messages: [
                "Hola, soy Milton",
                "Full Stack Developer",
                "WordPress Expert",
                "React Specialist",
                "PHP Developer",
                "Disponible para proyectos",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            start_delay_ms: 2000,
            timing: TypewriterTiming::default(),
        }
    }
}

/// Active section detection configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Height of the fixed header until the host measures it
    pub header_height: f64,
    /// Extra distance so a section activates before reaching the header
    pub lookahead_px: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            header_height: 70.0,
            lookahead_px: 100.0,
        }
    }
}

/// Reveal animation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay between skill bars of a skill category
    pub skill_stagger_ms: u64,
    /// Delay between avatar stat bars
    pub avatar_stagger_ms: u64,
    /// Interval between counter ticks
    pub counter_interval_ms: u64,
    /// Number of ticks a counter takes to reach its target
    pub counter_steps: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            skill_stagger_ms: 200,
            avatar_stagger_ms: 300,
            counter_interval_ms: 50,
            counter_steps: 50,
        }
    }
}

/// Header and navigation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset beyond which the header switches to its compact style
    pub scrolled_threshold_px: f64,
    /// Viewport width above which the mobile menu is force-closed on resize
    pub nav_collapse_width_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 100.0,
            nav_collapse_width_px: 768.0,
        }
    }
}

/// Trailing-edge debounce windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    pub scroll_ms: u64,
    pub resize_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            scroll_ms: 10,
            resize_ms: 250,
        }
    }
}

/// Contact form configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Simulated submission latency
    pub submit_delay_ms: u64,
    /// How long the status banner stays visible
    pub status_visible_ms: u64,
    /// Fade-out of the status banner
    pub status_fade_ms: u64,
    pub success_message: String,
    pub error_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            status_visible_ms: 5000,
            status_fade_ms: 300,
            success_message: "¡Mensaje enviado correctamente! Te contactaré pronto.".to_string(),
            error_message: "Error al enviar el mensaje. Por favor, intenta nuevamente.".to_string(),
        }
    }
}

/// Transient page effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Page load time above which a warning is logged
    pub slow_load_threshold_ms: u64,
    /// How long the easter egg stays active
    pub easter_egg_ms: u64,
    /// Slide-in delay of a notification after it is added
    pub notification_slide_in_ms: u64,
    /// How long a notification stays before sliding out
    pub notification_visible_ms: u64,
    /// Slide-out duration before the notification is removed
    pub notification_remove_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            slow_load_threshold_ms: 3000,
            easter_egg_ms: 5000,
            notification_slide_in_ms: 100,
            notification_visible_ms: 3000,
            notification_remove_ms: 300,
        }
    }
}
