use crate::args::OutputFormat;
use crate::config::Config;
use crate::presentation::formatters::terminal_width;
use crate::presentation::{ConsoleRenderer, DisplayOptions};
use is_terminal::IsTerminal;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: DisplayOptions,
}

impl HandlerContext {
    /// Color needs the config, the flag and a terminal on stdout to agree.
    pub fn new(format: OutputFormat, config: &Config, no_color: bool) -> Self {
        let stdout_is_tty = std::io::stdout().is_terminal();
        let options = DisplayOptions {
            enable_color: config.color && !no_color && stdout_is_tty,
            width: if stdout_is_tty { terminal_width() } else { None },
        };

        Self { format, options }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.is_json(), self.options.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_wins() {
        let ctx = HandlerContext::new(OutputFormat::Plain, &Config::default(), true);
        assert!(!ctx.options.enable_color);
        assert!(!ctx.is_json());
    }

    #[test]
    fn test_config_can_disable_color() {
        let config = Config {
            color: false,
            ..Config::default()
        };
        let ctx = HandlerContext::new(OutputFormat::Json, &config, false);
        assert!(!ctx.options.enable_color);
        assert!(ctx.is_json());
    }
}
