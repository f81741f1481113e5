use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::screen::{DetailScreen, ListScreen, NotFoundScreen, ScreenModel};
use crate::ui::theme::{
    icon_glyph, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let crumbs = app.breadcrumb();
    frame.render_widget(Header::new(&crumbs).widget(), header);
    frame.render_widget(Clear, body);

    match app.screen() {
        ScreenModel::List(screen) => draw_list(frame, body, screen, app),
        ScreenModel::Detail(screen) => draw_detail(frame, body, screen, app.show_icons()),
        ScreenModel::NotFound(screen) => draw_not_found(frame, body, screen),
    }

    let footer_widget = Footer::new(app.footer_hints());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn body_block(title: &str, icon: Option<&str>, show_icons: bool) -> Block<'static> {
    let title = match icon {
        Some(icon) if show_icons => format!(" {} {} ", icon_glyph(icon), title),
        _ => format!(" {} ", title),
    };
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

/// Shared template for the category list and the item list.
fn draw_list(frame: &mut Frame<'_>, area: Rect, screen: &ListScreen, app: &App) {
    let block = body_block(&screen.title, screen.icon.as_deref(), app.show_icons());

    if screen.rows.is_empty() {
        let empty = Paragraph::new(Line::from("No places in this category."))
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = screen
        .rows
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            if app.show_icons() {
                if let Some(icon) = row.icon.as_deref() {
                    spans.push(Span::raw(format!("{}  ", icon_glyph(icon))));
                }
            }
            spans.push(Span::styled(
                row.label.clone(),
                Style::default().fg(HEADER_TEXT),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut state = ListState::default();
    state.select(app.selection().selected());
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, screen: &DetailScreen, show_icons: bool) {
    let block = body_block(&screen.title, screen.icon.as_deref(), show_icons);
    let item = &screen.item;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            item.name.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled("Dirección: ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(item.address.clone(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            item.description.clone(),
            Style::default().fg(HEADER_TEXT),
        )),
    ];

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn draw_not_found(frame: &mut Frame<'_>, area: Rect, screen: &NotFoundScreen) {
    let popup_area = centered_rect(60, 40, area);
    let lines = vec![
        Line::from(Span::styled(
            "Not found",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(screen.message.clone()),
    ];
    let popup = Block::default()
        .title(Span::styled(
            format!(" {} ", screen.title),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(popup),
        popup_area,
    );
}
