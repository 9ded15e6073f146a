// Adapters layer: concrete implementations of the domain ports.

pub mod storage;

use crate::domain::model::ColorMode;
use crate::domain::ports::ColorSchemeSource;

/// A color scheme preference supplied up front, e.g. from a CLI flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScheme(pub Option<ColorMode>);

impl ColorSchemeSource for FixedScheme {
    fn preferred(&self) -> Option<ColorMode> {
        self.0
    }
}
