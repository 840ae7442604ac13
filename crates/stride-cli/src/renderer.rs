//! Terminal rendering for markdown output.
//!
//! All core display types format as markdown; this renderer either prints
//! them through a termimad skin or falls back to the raw text when color is
//! disabled or the output is not a terminal.

use termimad::{crossterm::style::Color, MadSkin};

/// Renderer that switches between rich markdown and plain text output.
pub struct TerminalRenderer {
    rich: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Creates a renderer; `rich` enables styled output.
    pub fn new(rich: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich, skin }
    }

    /// Renders markdown to stdout.
    pub fn render(&self, markdown: &str) {
        if self.rich {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
    }

    /// Renders a single plain line regardless of mode.
    pub fn line(&self, text: &str) {
        println!("{text}");
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
    fn plain_renderer_keeps_rich_disabled() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich);
    }

    #[test]
    fn default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich);
    }
}
