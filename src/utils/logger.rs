use colored::Color;
use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The five fixed output levels of the console logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Success,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Success => "SUCCESS",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Level::Debug => Color::Blue,
            Level::Info => Color::White,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
            Level::Success => Color::Green,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// Escapes are written directly: `Colorize` drops them when stdout is not a TTY.
const RESET: &str = "\x1b[0m";

/// Renders one log line without the trailing newline.
///
/// Colored output wraps the `[LEVEL]` tag in the level's foreground escape and
/// a reset, e.g. `\x1b[31m[ERROR]\x1b[0m no title provided`. Extra params are
/// appended after the message, separated by single spaces.
pub fn format_line(level: Level, message: &dyn Display, params: &[&dyn Display], color: bool) -> String {
    let mut line = String::new();
    if color {
        let _ = write!(line, "\x1b[{}m[{}]{} {}", level.color().to_fg_str(), level, RESET, message);
    } else {
        let _ = write!(line, "[{}] {}", level, message);
    }
    for param in params {
        let _ = write!(line, " {}", param);
    }
    line
}

/// Level-tagged console logger. Every call writes exactly one line; there is
/// no level filtering and write failures are dropped.
pub struct Logger<W: Write> {
    out: W,
    color: bool,
}

impl Logger<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Logger<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: true }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn log(&mut self, level: Level, message: impl Display, params: &[&dyn Display]) {
        let line = format_line(level, &message, params, self.color);
        let _ = writeln!(self.out, "{}", line);
        let _ = self.out.flush();
    }

    pub fn debug(&mut self, message: impl Display, params: &[&dyn Display]) {
        self.log(Level::Debug, message, params);
    }

    pub fn info(&mut self, message: impl Display, params: &[&dyn Display]) {
        self.log(Level::Info, message, params);
    }

    pub fn warn(&mut self, message: impl Display, params: &[&dyn Display]) {
        self.log(Level::Warn, message, params);
    }

    pub fn error(&mut self, message: impl Display, params: &[&dyn Display]) {
        self.log(Level::Error, message, params);
    }

    pub fn success(&mut self, message: impl Display, params: &[&dyn Display]) {
        self.log(Level::Success, message, params);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// 初始化診斷日誌 (stderr)，stdout 保留給 Logger 的輸出
pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("vip_title_check=debug,validate_pr_title=debug,color_mode=debug,warn"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // try_init: tests may install a subscriber more than once
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(logger: Logger<Vec<u8>>) -> String {
        String::from_utf8(logger.into_inner()).unwrap()
    }

    #[test]
    fn test_level_prefixes_and_colors() {
        let mut logger = Logger::new(Vec::new());
        logger.debug("d", &[]);
        logger.info("i", &[]);
        logger.warn("w", &[]);
        logger.error("e", &[]);
        logger.success("s", &[]);

        let text = output(logger);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "\x1b[34m[DEBUG]\x1b[0m d",
                "\x1b[37m[INFO]\x1b[0m i",
                "\x1b[33m[WARN]\x1b[0m w",
                "\x1b[31m[ERROR]\x1b[0m e",
                "\x1b[32m[SUCCESS]\x1b[0m s",
            ]
        );
    }

    #[test]
    fn test_extra_params_on_same_line() {
        let mut logger = Logger::new(Vec::new()).with_color(false);
        logger.info("loaded", &[&3, &"items"]);
        assert_eq!(output(logger), "[INFO] loaded 3 items\n");
    }

    #[test]
    fn test_one_line_per_call() {
        let mut logger = Logger::new(Vec::new());
        logger.warn("first", &[]);
        logger.warn("second", &[&"extra"]);
        assert_eq!(output(logger).lines().count(), 2);
    }

    #[test]
    fn test_format_line_plain() {
        let line = format_line(Level::Success, &"title is valid!", &[], false);
        assert_eq!(line, "[SUCCESS] title is valid!");
    }
}
