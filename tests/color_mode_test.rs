use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use vip_title_check::domain::ports::PreferenceStore;
use vip_title_check::{ColorMode, ColorModeController, FileStore, FixedScheme};

fn color_mode(store: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_color-mode"))
        .arg("--no-color")
        .arg("--store")
        .arg(store)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run color-mode")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_controller_with_file_store_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");

    let mut controller = ColorModeController::new(FileStore::new(&path), FixedScheme(None));
    assert_eq!(controller.toggle().mode, ColorMode::Dark);

    let reopened = ColorModeController::new(FileStore::new(&path), FixedScheme(Some(ColorMode::Light)));
    assert_eq!(reopened.current(), ColorMode::Dark);

    let store = FileStore::new(&path);
    assert_eq!(store.get("colorMode").unwrap(), Some("dark".to_string()));
}

#[test]
fn test_get_does_not_write() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");

    let output = color_mode(&path, &["--prefers", "dark", "get"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "[INFO] color mode: dark\n[INFO] data-theme=\"dark\" icon=bi-moon\n"
    );
    assert!(!path.exists());
}

#[test]
fn test_toggle_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");

    let output = color_mode(&path, &["toggle"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("[INFO] color mode: dark\n"));

    let output = color_mode(&path, &["toggle"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("icon=bi-brightness-high"));

    let store = FileStore::new(&path);
    assert_eq!(store.get("colorMode").unwrap(), Some("light".to_string()));
}

#[test]
fn test_set_then_init_keeps_stored_value() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");

    assert_eq!(color_mode(&path, &["set", "light"]).status.code(), Some(0));

    let output = color_mode(&path, &["--prefers", "dark", "init"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("color mode: light"));
}

#[test]
fn test_unknown_mode_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");

    let output = color_mode(&path, &["set", "auto"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("[ERROR]"));
    assert!(!path.exists());
}

#[test]
fn test_corrupt_store_falls_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");
    std::fs::write(&path, "not json").unwrap();

    let output = color_mode(&path, &["--prefers", "dark", "get"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("color mode: dark"));
}
