use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar showing the breadcrumb of the back-stack.
pub struct Header<'a> {
    crumbs: &'a [String],
}

impl<'a> Header<'a> {
    pub fn new(crumbs: &'a [String]) -> Self {
        Self { crumbs }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let current_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled("  ", text_style)];
        for (idx, crumb) in self.crumbs.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  ›  ", separator_style));
            }
            let style = if idx + 1 == self.crumbs.len() {
                current_style
            } else {
                text_style
            };
            spans.push(Span::styled(crumb.clone(), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
