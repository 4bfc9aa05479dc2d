//! Unit tests for settings persistence and application.

use crate::helpers::{test_editor, test_settings};
use spritedesk::settings::{EmptyClickPolicy, Settings};
use spritedesk::{Color, Editor};
use tempfile::tempdir;

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        fps: 30,
        sprite_color: "#112233".to_string(),
        empty_click: EmptyClickPolicy::KeepSelection,
        ..Settings::default()
    };
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempdir().unwrap();
    assert!(Settings::load_from(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_load_invalid_json_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ fps: sixty").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing"));
}

#[test]
fn test_load_sanitizes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"fps": 0, "sprite_height": 0, "sprite_color": "plaid"}"#).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.fps, 1);
    assert_eq!(loaded.sprite_height, 1);
    assert_eq!(loaded.sprite_color, "#ffffff");
}

#[test]
fn test_editor_uses_settings_for_new_sprites() {
    let mut editor = Editor::with_settings(Settings {
        sprite_width: 32,
        sprite_height: 16,
        sprite_color: "blue".to_string(),
        ..test_settings()
    });

    let id = editor.create_sprite("A", 0.0, 0.0);
    let sprite = editor.scene.get(id).unwrap();
    assert_eq!(sprite.size, (32.0, 16.0));
    assert_eq!(sprite.color, Color::rgb(0, 0, 0xff));
}

#[test]
fn test_demo_sprite_toggle() {
    let editor = Editor::with_settings(Settings::default());
    assert_eq!(editor.scene.len(), 1);
    let demo = editor.scene.iter().next().unwrap();
    assert_eq!(demo.name, "TestObject");
    assert_eq!(demo.position, (100.0, 100.0));
    assert_eq!(demo.color.to_hex(), "#3498db");

    let editor = Editor::with_settings(test_settings());
    assert!(editor.scene.is_empty());
}

#[test]
fn test_apply_settings_keeps_existing_sprites() {
    let mut editor = test_editor();
    let old = editor.create_sprite("Old", 0.0, 0.0);

    editor.apply_settings(Settings {
        sprite_width: 80,
        fps: 30,
        ..test_settings()
    });

    let new = editor.create_sprite("New", 0.0, 0.0);
    assert_eq!(editor.scene.get(old).unwrap().size, (50.0, 50.0));
    assert_eq!(editor.scene.get(new).unwrap().size, (80.0, 50.0));
    assert_eq!(editor.frames.fps(), 30);
    assert!(editor.take_redraw_request());
}
