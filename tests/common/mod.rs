//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use mycity::catalog::{CategoryKey, CategoryRegistry, StaticCatalog};
use mycity::ui::app::App;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// One category, one item: the smallest useful catalog.
pub const PARQUES_CATALOG: &str = r#"
[strings]
ciudad = "Mi Ciudad"
parques = "Parques"

[[category]]
key = "Parques"
label = "parques"
icon = "parque"
names = ["Parque Central"]
addresses = ["Calle 1"]
descriptions = ["Un parque"]
"#;

pub fn key(raw: &str) -> CategoryKey {
    CategoryKey::new(raw).expect("valid category key")
}

pub fn registry_from(toml: &str) -> Arc<CategoryRegistry> {
    let catalog = StaticCatalog::from_toml_str(toml, "test").expect("catalog parses");
    Arc::new(CategoryRegistry::load(catalog).expect("catalog loads"))
}

pub fn bundled_registry() -> Arc<CategoryRegistry> {
    Arc::new(CategoryRegistry::load(StaticCatalog::bundled().expect("bundled")).expect("loads"))
}

pub fn make_app() -> App {
    App::new(bundled_registry())
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
