//! Draws each screen kind into a ratatui `TestBackend`.

mod common;

use common::*;
use mycity::navigation::NavigationTarget;
use mycity::ui::app::App;
use mycity::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(app: &App) -> String {
    let backend = TestBackend::new(70, 20);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn app_without_icons() -> App {
    let mut app = App::new(registry_from(PARQUES_CATALOG));
    app.set_show_icons(false);
    app
}

#[test]
fn category_list_shows_title_and_rows() {
    let app = app_without_icons();
    let screen = render(&app);
    assert!(screen.contains("Mi Ciudad"));
    assert!(screen.contains("› Parques"));
    assert!(screen.contains("Enter: Open"));
    assert!(!screen.contains("Backspace: Back"));
}

#[test]
fn item_detail_shows_address_and_description() {
    let mut app = app_without_icons();
    app.navigate_to(NavigationTarget::category_detail(key("Parques")));
    app.select();
    let screen = render(&app);
    assert!(screen.contains("Parque Central"));
    assert!(screen.contains("Calle 1"));
    assert!(screen.contains("Un parque"));
    assert!(screen.contains("Backspace: Back"));
}

#[test]
fn empty_category_shows_placeholder() {
    let mut app = app_without_icons();
    app.navigate_to(NavigationTarget::category_detail(key("Unknown")));
    let screen = render(&app);
    assert!(screen.contains("No places in this category."));
}

#[test]
fn missing_item_shows_not_found() {
    let mut app = app_without_icons();
    app.navigate_to(NavigationTarget::item_detail(key("Parques"), 5));
    let screen = render(&app);
    assert!(screen.contains("Not found"));
}
