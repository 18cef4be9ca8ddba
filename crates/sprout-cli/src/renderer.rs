//! Terminal rendering for plan reports.
//!
//! Plans and catalog listings come out of the core crate as markdown;
//! this module renders them richly via termimad, with a plain-text
//! fallback for `--no-color` and non-interactive use.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Cyan);
        skin.table.set_fg(Color::White);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            print!("{}", self.skin.term_text(markdown));
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_renderer_is_plain() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
