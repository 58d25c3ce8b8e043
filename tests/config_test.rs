//! Integration tests for Settings layered loading.
//!
//! Each test uses its own env prefix so parallel tests never see each
//! other's overrides.

use std::fs;

use tempfile::TempDir;

use teamtree::config::{DisplayStyle, Settings};
use teamtree::domain::Layout;

#[test]
fn given_global_config_when_loading_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("teamtree.toml");
    fs::write(&global, "[display]\nindent_width = 2\n").unwrap();

    // Act
    let settings = Settings::load_from(Some(&global), None, "TEAMTREE_IT_GLOBAL").unwrap();

    // Assert
    assert_eq!(settings.display.indent_width, 2);
    assert_eq!(settings.display.marker, "- ");
    assert!(settings.color);
}

#[test]
fn given_explicit_file_when_loading_then_wins_over_global() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("global.toml");
    let explicit = dir.path().join("explicit.toml");
    fs::write(&global, "color = false\n[display]\nmarker = \"* \"\n").unwrap();
    fs::write(&explicit, "[display]\nmarker = \"> \"\nstyle = \"tree\"\n").unwrap();

    let settings =
        Settings::load_from(Some(&global), Some(&explicit), "TEAMTREE_IT_EXPLICIT").unwrap();

    assert!(!settings.color);
    assert_eq!(settings.display.marker, "> ");
    assert_eq!(settings.display.style, DisplayStyle::Tree);
    assert_eq!(settings.layout(), Layout::new(4, "> "));
}

#[test]
fn given_missing_global_file_when_loading_then_ignored() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("absent.toml");

    let settings = Settings::load_from(Some(&global), None, "TEAMTREE_IT_ABSENT").unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_explicit_file_when_loading_then_errors() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("absent.toml");

    let result = Settings::load_from(None, Some(&explicit), "TEAMTREE_IT_MISSING");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().starts_with("config error:"));
}

#[test]
fn given_env_override_when_loading_then_env_wins() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "[display]\nindent_width = 8\n").unwrap();
    std::env::set_var("TEAMTREE_IT_ENV_DISPLAY__INDENT_WIDTH", "3");
    std::env::set_var("TEAMTREE_IT_ENV_DISPLAY__STYLE", "tree");

    let settings = Settings::load_from(None, Some(&explicit), "TEAMTREE_IT_ENV").unwrap();

    assert_eq!(settings.display.indent_width, 3);
    assert_eq!(settings.display.style, DisplayStyle::Tree);
}

#[test]
fn given_existing_file_when_writing_template_then_requires_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("teamtree.toml");

    Settings::write_template(&path, false).unwrap();
    let second = Settings::write_template(&path, false);
    let forced = Settings::write_template(&path, true);

    assert!(second.is_err());
    assert!(forced.is_ok());
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, Settings::template());
}
