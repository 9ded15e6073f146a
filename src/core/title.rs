use crate::domain::model::TitleCandidate;
use crate::utils::error::{Result, TitleError};
use crate::utils::logger::Logger;
use regex::Regex;
use std::io::Write;

/// `VIP-` + two digits + `-` + four digits + `: ` + one or more visible
/// ASCII characters (0x20..=0x7E).
pub const TITLE_PATTERN: &str = r"^VIP-[0-9]{2}-[0-9]{4}: [ -~]+$";

#[derive(Debug, Clone)]
pub struct TitleValidator {
    pattern: Regex,
}

impl TitleValidator {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(TITLE_PATTERN)?;
        Ok(Self { pattern })
    }

    pub fn is_valid(&self, title: &str) -> bool {
        self.pattern.is_match(title)
    }

    pub fn check(&self, arg: Option<&str>) -> std::result::Result<(), TitleError> {
        let title = TitleCandidate::from_arg(arg).ok_or(TitleError::MissingTitle)?;

        if !self.is_valid(title.as_str()) {
            return Err(TitleError::InvalidFormat {
                title: title.as_str().to_string(),
            });
        }

        Ok(())
    }

    /// Checks the title, logs the outcome and returns the process exit code.
    pub fn run<W: Write>(&self, arg: Option<&str>, logger: &mut Logger<W>) -> i32 {
        tracing::debug!("Validating title {:?} against {}", arg, TITLE_PATTERN);

        match self.check(arg) {
            Ok(()) => {
                logger.success("title is valid!", &[]);
                0
            }
            Err(e) => {
                logger.error(&e, &[]);
                e.exit_code()
            }
        }
    }
}
