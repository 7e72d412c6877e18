//! Debug logging for the engines
//!
//! The engines log through the `log` facade with one target per category.
//! `DebugLogger` is the stderr backend the CLI installs; it filters by level
//! and category the same way for every engine.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Debug log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Every tick and intermediate value
    Trace,
    /// Development debugging information
    Debug,
    /// Important state changes
    Info,
    /// Potential issues
    Warn,
    /// Error situations
    Error,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

/// Debug log category, one per engine plus the host-side pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebugCategory {
    /// Loading and hero step sequences
    Sequence,
    /// Typewriter carousel
    Typewriter,
    /// Active section detection
    Section,
    /// Reveal decisions
    Reveal,
    /// Session wiring (theme, navigation, form)
    Session,
    /// Preference store and configuration
    Storage,
}

impl DebugCategory {
    pub const ALL: [DebugCategory; 6] = [
        DebugCategory::Sequence,
        DebugCategory::Typewriter,
        DebugCategory::Section,
        DebugCategory::Reveal,
        DebugCategory::Session,
        DebugCategory::Storage,
    ];

    /// `log` target used by code in this category
    pub fn target(self) -> &'static str {
        match self {
            DebugCategory::Sequence => SEQUENCE,
            DebugCategory::Typewriter => TYPEWRITER,
            DebugCategory::Section => SECTION,
            DebugCategory::Reveal => REVEAL,
            DebugCategory::Session => SESSION,
            DebugCategory::Storage => STORAGE,
        }
    }

    pub fn from_target(target: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| {
            let prefix = category.target();
            target == prefix || target.starts_with(&format!("{prefix}::"))
        })
    }
}

pub(crate) const SEQUENCE: &str = "vitrina::sequence";
pub(crate) const TYPEWRITER: &str = "vitrina::typewriter";
pub(crate) const SECTION: &str = "vitrina::section";
pub(crate) const REVEAL: &str = "vitrina::reveal";
pub(crate) const SESSION: &str = "vitrina::session";
pub(crate) const STORAGE: &str = "vitrina::storage";

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Enable debug logging
    pub enabled: bool,
    /// Minimum log level
    pub level: LogLevel,
    /// Enabled categories
    pub categories: HashSet<DebugCategory>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        let mut categories = HashSet::new();
        categories.insert(DebugCategory::Sequence);
        categories.insert(DebugCategory::Session);

        Self {
            enabled: std::env::var("VITRINA_DEBUG").is_ok(),
            level: LogLevel::Debug,
            categories,
        }
    }
}

impl DebugConfig {
    /// Enabled, at `level`, for every category
    pub fn verbose(level: LogLevel) -> Self {
        Self {
            enabled: true,
            level,
            categories: DebugCategory::ALL.into_iter().collect(),
        }
    }

    fn accepts(&self, level: log::Level, target: &str) -> bool {
        if !self.enabled || level > self.level.to_level_filter() {
            return false;
        }
        match DebugCategory::from_target(target) {
            Some(category) => self.categories.contains(&category),
            // Records from other crates only pass at warn and above
            None => level <= log::Level::Warn,
        }
    }
}

/// `log` backend writing `[LEVEL] Category message` lines to stderr
#[derive(Debug)]
pub struct DebugLogger {
    config: DebugConfig,
}

impl DebugLogger {
    pub fn new(config: DebugConfig) -> Self {
        Self { config }
    }

    /// Install as the global logger; fails if one is already installed
    pub fn init(config: DebugConfig) -> Result<(), log::SetLoggerError> {
        let max_level = if config.enabled {
            config.level.to_level_filter()
        } else {
            log::LevelFilter::Off
        };
        log::set_boxed_logger(Box::new(Self::new(config)))?;
        log::set_max_level(max_level);
        Ok(())
    }

    fn format_record(record: &log::Record<'_>) -> String {
        let category = match DebugCategory::from_target(record.target()) {
            Some(category) => format!("{category:?}"),
            None => record.target().to_string(),
        };
        format!("[{}] {:10} {}", record.level(), category, record.args())
    }
}

impl log::Log for DebugLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.config.accepts(metadata.level(), metadata.target())
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format_record(record));
        }
    }

    fn flush(&self) {}
}
