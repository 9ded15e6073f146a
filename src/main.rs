use vip_title_check::config::exit_on_parse_error;
use vip_title_check::utils::logger;
use vip_title_check::{CliConfig, Logger, TitleValidator};

fn main() {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => exit_on_parse_error(e),
    };

    // 初始化日誌
    logger::init_cli_logger(false);
    tracing::debug!("CLI config: {:?}", config);

    let mut out = Logger::stdout().with_color(!config.no_color);

    let validator = match TitleValidator::new() {
        Ok(validator) => validator,
        Err(e) => {
            tracing::error!("Failed to build title pattern: {}", e);
            out.error(&e, &[]);
            std::process::exit(1);
        }
    };

    let exit_code = validator.run(config.title(), &mut out);
    std::process::exit(exit_code);
}
