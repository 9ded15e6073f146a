use crate::domain::model::{ColorMode, ThemeConfig};
use crate::domain::ports::{ColorSchemeSource, PreferenceStore};

pub const COLOR_MODE_KEY: &str = "colorMode";

/// Resolves, persists and toggles the light/dark preference. Storage
/// failures never abort an operation; they are logged and skipped.
pub struct ColorModeController<S: PreferenceStore, P: ColorSchemeSource> {
    store: S,
    scheme: P,
}

impl<S: PreferenceStore, P: ColorSchemeSource> ColorModeController<S, P> {
    pub fn new(store: S, scheme: P) -> Self {
        Self { store, scheme }
    }

    fn fallback(&self) -> ColorMode {
        match self.scheme.preferred() {
            Some(ColorMode::Dark) => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }

    /// The stored string as-is, or the fallback mode's name when nothing
    /// readable is stored.
    fn raw_mode(&self) -> String {
        match self.store.get(COLOR_MODE_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => self.fallback().as_str().to_string(),
            Err(e) => {
                tracing::warn!("Could not read {}: {}", COLOR_MODE_KEY, e);
                self.fallback().as_str().to_string()
            }
        }
    }

    /// Stored value first, then the host scheme, then light.
    pub fn current(&self) -> ColorMode {
        let raw = self.raw_mode();
        match raw.parse::<ColorMode>() {
            Ok(mode) => mode,
            Err(e) => {
                tracing::warn!("Ignoring stored {}: {}", COLOR_MODE_KEY, e);
                self.fallback()
            }
        }
    }

    pub fn set(&mut self, mode: ColorMode) -> ThemeConfig {
        if let Err(e) = self.store.set(COLOR_MODE_KEY, mode.as_str()) {
            tracing::warn!("Could not persist {}={}: {}", COLOR_MODE_KEY, mode, e);
        }
        tracing::debug!("Color mode set to {}", mode);
        ThemeConfig::for_mode(mode)
    }

    /// Anything other than a stored `light` switches to dark; an unknown
    /// stored value such as `auto` switches to light.
    pub fn toggle(&mut self) -> ThemeConfig {
        let next = if self.raw_mode() == ColorMode::Light.as_str() {
            ColorMode::Dark
        } else {
            ColorMode::Light
        };
        self.set(next)
    }

    /// Applies the resolved mode, as done once when a page loads.
    pub fn init(&mut self) -> ThemeConfig {
        let mode = self.current();
        self.set(mode)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
