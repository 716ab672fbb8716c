//! Terminal styling for command output.
//!
//! Colors are only a presentation layer; formatted number strings are
//! produced uncolored and styled at the point of printing.

use colored::Colorize;
use std::io::IsTerminal;

/// When command output may carry ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `NO_COLOR`, `CLICOLOR=0` and `CLICOLOR_FORCE=1` settle `Auto`.
    fn from_env_vars(no_color: bool, clicolor: Option<&str>, clicolor_force: Option<&str>) -> Self {
        match (clicolor_force, no_color, clicolor) {
            (Some("1"), _, _) => ColorMode::Always,
            (_, true, _) | (_, _, Some("0")) => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    }

    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let clicolor = std::env::var("CLICOLOR").ok();
        let clicolor_force = std::env::var("CLICOLOR_FORCE").ok();
        Self {
            color: ColorMode::from_env_vars(
                std::env::var_os("NO_COLOR").is_some(),
                clicolor.as_deref(),
                clicolor_force.as_deref(),
            ),
        }
    }

    /// A mode given on the command line wins over the environment.
    pub fn resolve(cli_mode: ColorMode) -> Self {
        match cli_mode {
            ColorMode::Auto => Self::from_env(),
            forced => Self { color: forced },
        }
    }

    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

pub trait OutputFormatter {
    /// Highlight a formatted negative value.
    fn negative(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter;

impl OutputFormatter for ColoredFormatter {
    fn negative(&self, text: &str) -> String {
        text.red().to_string()
    }

    fn header(&self, text: &str) -> String {
        text.bold().underline().to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.dimmed().to_string()
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn negative(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick the formatter matching `config`.
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config.color.enabled() {
        colored::control::set_override(true);
        Box::new(ColoredFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}
