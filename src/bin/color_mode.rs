use anyhow::Context;
use clap::Parser;
use vip_title_check::config::{exit_on_parse_error, ColorModeCommand};
use vip_title_check::utils::{logger, validation::Validate};
use vip_title_check::{ColorModeConfig, ColorModeController, FileStore, FixedScheme, Logger, ThemeConfig};

fn main() {
    let config = match ColorModeConfig::try_parse() {
        Ok(config) => config,
        Err(e) => exit_on_parse_error(e),
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let mut out = Logger::stdout().with_color(!config.no_color);

    match run(&config) {
        Ok(theme) => {
            out.info(format!("color mode: {}", theme.mode), &[]);
            out.info(
                format!("data-theme=\"{}\"", theme.data_theme),
                &[&format!("icon={}", theme.icon)],
            );
        }
        Err(e) => {
            tracing::error!("color-mode failed: {:#}", e);
            out.error(format!("{:#}", e), &[]);
            std::process::exit(1);
        }
    }
}

fn run(config: &ColorModeConfig) -> anyhow::Result<ThemeConfig> {
    config.validate().context("invalid configuration")?;

    let store = FileStore::new(&config.store);
    tracing::debug!("Using preference store {}", store.path().display());

    let mut controller = ColorModeController::new(store, FixedScheme(config.prefers));

    let theme = match config.command {
        ColorModeCommand::Get => ThemeConfig::for_mode(controller.current()),
        ColorModeCommand::Set { mode } => controller.set(mode),
        ColorModeCommand::Toggle => controller.toggle(),
        ColorModeCommand::Init => controller.init(),
    };

    Ok(theme)
}
