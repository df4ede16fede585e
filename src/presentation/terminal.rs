//! Terminal capability detection for status lines.
//!
//! Color needs a TTY and no `NO_COLOR`; unicode icons need a UTF-8 locale
//! (an unset locale counts as UTF-8). `TERM=dumb` turns both off.

use is_terminal::IsTerminal;

use super::cli::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
}

impl TerminalCapabilities {
    /// Apply an explicit `--color` choice on top of detection
    pub fn with_color_choice(mut self, choice: Option<ColorWhen>) -> Self {
        match choice {
            Some(ColorWhen::Always) => self.supports_color = true,
            Some(ColorWhen::Never) => self.supports_color = false,
            Some(ColorWhen::Auto) | None => {}
        }
        self
    }
}

/// Detect capabilities of stdout from the process environment
pub fn detect_capabilities() -> TerminalCapabilities {
    detect_from(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

fn detect_from(env: impl Fn(&str) -> Option<String>, stdout_is_tty: bool) -> TerminalCapabilities {
    let dumb = env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

    TerminalCapabilities {
        supports_color: stdout_is_tty && !dumb && env("NO_COLOR").is_none(),
        supports_unicode: !dumb && locale_is_utf8(&env),
    }
}

/// First non-empty of `LC_ALL`, `LC_CTYPE`, `LANG` decides.
fn locale_is_utf8(env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| env(key).filter(|v| !v.is_empty()))
        .map_or(true, |locale| {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf-8") || locale.contains("utf8")
        })
}
