//! Runs the binary in `--print` mode, which resolves a route without a TTY.

mod common;

use common::{temp_file, PARQUES_CATALOG};
use std::process::{Command, Output};
use tempfile::TempDir;

fn mycity_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mycity"));
    cmd.arg("--config")
        .arg(home.path().join("missing-config.toml"))
        .env("XDG_CACHE_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    let home = TempDir::new().expect("Failed to create temp dir");
    mycity_cmd(&home)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_mentions_route_option() {
    let output = run(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--route"));
    assert!(stdout.contains("--print"));
}

#[test]
fn test_print_category_list() {
    let output = run(&["--print"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Mi Ciudad\n"));
    assert!(stdout.contains("  0. Restaurantes"));
    assert!(stdout.contains("  4. Gasolineras"));
    // Each category is listed exactly once.
    assert_eq!(stdout.matches("Parques").count(), 1);
}

#[test]
fn test_print_item_detail() {
    let output = run(&["--print", "--route", "item_detail/Parques/0"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Parques\n"));
    assert!(stdout.contains("Parque Central"));
    assert!(stdout.contains("Plaza de Armas s/n, Centro"));
}

#[test]
fn test_print_out_of_range_item_is_not_found() {
    let output = run(&["--print", "--route", "item_detail/Parques/99"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Not found: Item 99 is out of range for 'Parques'"));
}

#[test]
fn test_print_json() {
    let output = run(&["--print", "--json", "--route", "category_detail/Unknown"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["kind"], "list");
    assert_eq!(value["title"], "Unknown");
    assert_eq!(value["rows"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_invalid_route_exits_with_error() {
    let output = run(&["--print", "--route", "settings/Parques"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid route 'settings/Parques'"));
    assert!(stderr.contains("Unknown screen 'settings'"));
}

#[test]
fn test_catalog_override() {
    let (_dir, catalog) = temp_file("catalog.toml", PARQUES_CATALOG);
    let catalog = catalog.to_string_lossy().into_owned();
    let output = run(&["--print", "--catalog", &catalog]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "Mi Ciudad\n=========\n  0. Parques\n");
}

#[test]
fn test_misaligned_catalog_fails() {
    let (_dir, catalog) = temp_file(
        "catalog.toml",
        r#"
[[category]]
key = "Parques"
label = "parques"
icon = "parque"
names = ["A", "B"]
addresses = ["1"]
descriptions = ["x", "y"]
"#,
    );
    let catalog = catalog.to_string_lossy().into_owned();
    let output = run(&["--print", "--catalog", &catalog]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load catalog"));
    assert!(stderr.contains("misaligned"));
}

#[test]
fn test_json_requires_print() {
    let output = run(&["--json"]);
    assert!(!output.status.success());
}
