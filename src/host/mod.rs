//! Headless host pieces: the session that wires the engines together and the
//! small input state machines it owns

pub mod debounce;
pub mod form;
pub mod konami;
pub mod navigation;
pub mod notification;
pub mod session;

pub use debounce::Debouncer;
pub use form::{ContactForm, FormStatus};
pub use konami::KonamiDetector;
pub use navigation::{AccessibilityFlags, NavState};
pub use notification::{Notification, NotificationId, NotificationPhase, Notifications};
pub use session::{
    HeroFrame, KeyOutcome, LoadingFrame, LoadingPhase, NavigateFrame, ResizeFrame, ScheduledReveal,
    ScrollFrame, Session, TargetId,
};
