//! UI-agnostic state for the JaNOracle front-end: localized UI strings and a
//! light/dark theme preference that is persisted across sessions and
//! mirrored onto the presentation root.
//!
//! UI shells (Tauri, TUI, web view) construct an [`App`] once at startup,
//! subscribe to its stores, and render from the values they observe.

pub mod app;
pub mod i18n;
pub mod mirror;
pub mod settings;
pub mod store;
pub mod theme;

// Re-export main types for convenience
pub use app::App;
pub use i18n::{bundle, suggestions, Answer, Language, LanguageStore, TranslationBundle};
pub use mirror::{NoopMirror, PresentationMirror};
pub use settings::{FileSettings, MemorySettings, NoopSettings, SettingsStore};
pub use store::{Derived, Store, Subscription};
pub use theme::{Theme, ThemeStore, THEME_ATTRIBUTE, THEME_KEY};
