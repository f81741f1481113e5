use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which key hints apply to the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterHints {
    pub can_select: bool,
    pub can_go_back: bool,
}

pub struct Footer {
    hints: FooterHints,
}

impl Footer {
    pub fn new(hints: FooterHints) -> Self {
        Self { hints }
    }

    pub fn hint_text(&self) -> String {
        let mut parts = Vec::new();
        if self.hints.can_select {
            parts.push("↑/↓: Move");
            parts.push("Enter: Open");
        }
        if self.hints.can_go_back {
            parts.push("Backspace: Back");
        }
        parts.push("q: Quit");
        format!(" {}", parts.join(" │ "))
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hint_text();
        let version = format!("v{} ", VERSION);

        // Padding by char count, not bytes: hints contain arrows and box glyphs.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
