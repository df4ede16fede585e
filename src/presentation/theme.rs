//! Icons and colors for status lines.

use crossterm::style::{Color, Stylize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Directory ready, library copied, staged copy current
    Success,
    /// Library not found, staged copy stale or absent
    Error,
    /// Source missing during a non-strict check
    Warning,
    /// Dry-run plan
    Pending,
    /// Separates a library name from its destination
    Arrow,
}

impl Icon {
    /// (unicode glyph, ASCII fallback, color)
    fn glyphs(self) -> (&'static str, &'static str, Color) {
        match self {
            Icon::Success => ("✓", "[OK]", Color::Green),
            Icon::Error => ("✗", "[FAIL]", Color::Red),
            Icon::Warning => ("⚠", "[WARN]", Color::Yellow),
            Icon::Pending => ("○", "[DRY]", Color::Cyan),
            Icon::Arrow => ("->", "->", Color::DarkGrey),
        }
    }

    pub fn render(self, unicode: bool) -> &'static str {
        let (glyph, ascii, _) = self.glyphs();
        if unicode {
            glyph
        } else {
            ascii
        }
    }

    pub fn colored(self, color: bool, unicode: bool) -> String {
        let text = self.render(unicode);
        if color {
            text.with(self.glyphs().2).to_string()
        } else {
            text.to_string()
        }
    }
}
