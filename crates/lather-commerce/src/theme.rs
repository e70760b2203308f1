//! Color theme preference.

use lather_storage::Storage;
use tracing::warn;

/// Storage key holding the theme preference.
pub const THEME_KEY: &str = "latherlux_theme";

/// The storefront color theme, persisted as a bare `"light"`/`"dark"`
/// string. Anything absent or unrecognized reads as light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
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

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Read the saved preference, defaulting to light.
    pub fn load<S: Storage>(storage: &S) -> Theme {
        match storage.get_item(THEME_KEY) {
            Ok(Some(raw)) => Theme::from_str(&raw).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "theme preference unreadable, using light");
                Theme::default()
            }
        }
    }

    /// Persist this preference.
    pub fn save<S: Storage>(&self, storage: &S) {
        if let Err(e) = storage.set_item(THEME_KEY, self.as_str()) {
            warn!(error = %e, "failed to save theme preference");
        }
    }

    /// Flip the saved preference and return the new theme.
    pub fn toggle<S: Storage>(storage: &S) -> Theme {
        let next = Theme::load(storage).toggled();
        next.save(storage);
        next
    }
}
