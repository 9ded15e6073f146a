use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pull-request title taken from the command line. An empty argument
/// counts as no title at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCandidate(String);

impl TitleCandidate {
    pub fn from_arg(arg: Option<&str>) -> Option<Self> {
        match arg {
            Some(title) if !title.is_empty() => Some(Self(title.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(AppError::InvalidColorMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Everything a renderer needs to paint a color mode: the `data-theme`
/// attribute value and the toggle button's icon class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    pub mode: ColorMode,
    pub data_theme: &'static str,
    pub icon: &'static str,
}

impl ThemeConfig {
    pub fn for_mode(mode: ColorMode) -> Self {
        let icon = match mode {
            ColorMode::Light => "bi-brightness-high",
            ColorMode::Dark => "bi-moon",
        };
        Self {
            mode,
            data_theme: mode.as_str(),
            icon,
        }
    }
}
