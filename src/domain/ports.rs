use crate::domain::model::ColorMode;
use crate::utils::error::Result;

/// Key-value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The host environment's reported color scheme, if it has one.
pub trait ColorSchemeSource {
    fn preferred(&self) -> Option<ColorMode>;
}
