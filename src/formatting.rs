use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // NO_COLOR per no-color.org; CLICOLOR/CLICOLOR_FORCE per BSD convention
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only configuration for piped or scripted output.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    /// Push the color decision into the `colored` crate's global control.
    pub fn apply(&self) {
        match self.color {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => colored::control::unset_override(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_disables_color() {
        let config = FormattingConfig::plain();
        assert_eq!(config.color, ColorMode::Never);
        assert!(!config.color.should_use_color());
    }

    #[test]
    fn always_forces_color_on() {
        assert!(ColorMode::Always.should_use_color());
    }
}
