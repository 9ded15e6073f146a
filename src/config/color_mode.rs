use crate::domain::model::ColorMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "color-mode", version)]
#[command(about = "Read, set or toggle the persisted light/dark color mode")]
pub struct ColorModeConfig {
    /// JSON file holding the colorMode preference
    #[arg(long, default_value = ".color-mode.json")]
    pub store: String,

    /// Color scheme reported by the host, used when nothing is stored
    #[arg(long)]
    pub prefers: Option<ColorMode>,

    #[arg(short, long, help = "Enable verbose diagnostics on stderr")]
    pub verbose: bool,

    #[arg(long, help = "Print log tags without color escapes")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: ColorModeCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ColorModeCommand {
    /// Show the resolved color mode without writing it
    Get,
    /// Store the given color mode
    Set { mode: ColorMode },
    /// Switch between light and dark
    Toggle,
    /// Resolve the color mode and store it
    Init,
}

impl Validate for ColorModeConfig {
    fn validate(&self) -> Result<()> {
        validate_path("store", &self.store)
    }
}
