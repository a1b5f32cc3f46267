//! Application context owning the UI-agnostic stores.

use std::rc::Rc;

use crate::i18n::LanguageStore;
use crate::mirror::{NoopMirror, PresentationMirror};
use crate::settings::{FileSettings, NoopSettings, SettingsStore};
use crate::theme::ThemeStore;

/// The stores a UI shell binds to: the current language with its derived
/// translation bundle and suggestion list, and the persisted theme. The two
/// are independent. Constructed once at application start; dropping the
/// context releases every internal subscription.
pub struct App {
    pub language: LanguageStore,
    pub theme: ThemeStore,
}

impl App {
    /// Build with detected host capabilities: settings in the platform
    /// config directory when one exists, no-op ports otherwise. Shells with
    /// a presentation surface should use [`App::with_ports`] instead.
    pub fn new() -> Self {
        let settings: Rc<dyn SettingsStore> = match FileSettings::discover() {
            Some(settings) => Rc::new(settings),
            None => Rc::new(NoopSettings),
        };
        Self::with_ports(settings, Rc::new(NoopMirror))
    }

    /// Build with injected capability ports.
    pub fn with_ports(
        settings: Rc<dyn SettingsStore>,
        mirror: Rc<dyn PresentationMirror>,
    ) -> Self {
        Self {
            language: LanguageStore::new(),
            theme: ThemeStore::new(settings, mirror),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
