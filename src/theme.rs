//! Light/dark theme preference, persisted across sessions.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::debug;

use crate::mirror::PresentationMirror;
use crate::settings::SettingsStore;
use crate::store::{Store, Subscription};

/// Settings key the theme is persisted under
pub const THEME_KEY: &str = "theme";

/// Attribute mirrored onto the presentation root
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Presentation theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything other than `"light"` or `"dark"`
    /// is treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Single source of truth for the light/dark presentation preference.
///
/// Every transition, self-transitions included, writes the new value to the
/// settings port under [`THEME_KEY`] and mirrors it to the presentation port
/// as [`THEME_ATTRIBUTE`]; both mirrors run before external subscribers are
/// notified. The initial theme is resolved once, at construction: a valid
/// persisted value is adopted with the full transition side effects,
/// anything else means starting as [`Theme::Light`] with no side effect
/// beyond the read.
pub struct ThemeStore {
    theme: Store<Theme>,
    _mirror_sub: Subscription,
}

impl ThemeStore {
    pub fn new(settings: Rc<dyn SettingsStore>, mirror: Rc<dyn PresentationMirror>) -> Self {
        let theme = Store::new(Theme::default());

        let saved = settings.get(THEME_KEY);
        let initial = saved.as_deref().and_then(Theme::parse);
        if let Some(value) = &saved {
            if initial.is_none() {
                debug!("ignoring invalid persisted theme {value:?}");
            }
        }

        let mirror_sub = theme.subscribe(move |theme: &Theme| {
            settings.set(THEME_KEY, theme.as_str());
            mirror.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        });

        let store = Self {
            theme,
            _mirror_sub: mirror_sub,
        };
        if let Some(theme) = initial {
            store.set(theme);
        }
        store
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    /// Set the current theme, re-running the mirrors and notifying
    /// subscribers before returning.
    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn subscribe(&self, f: impl FnMut(&Theme) + 'static) -> Subscription {
        self.theme.subscribe(f)
    }
}
