//! Integration tests for attaching scripts to sprites.

use crate::helpers::editor_with_sprite;
use spritedesk::notifications::ToastVariant;

#[test]
fn test_new_script_opens_empty() {
    let (mut editor, a) = editor_with_sprite();
    editor.select_sprite(a);

    assert_eq!(editor.inspector().unwrap().script_button_label, "Add Script");
    let session = editor.edit_script_of_selected().unwrap();
    assert_eq!(session.sprite_id, a);
    assert_eq!(session.text, "");
    assert_eq!(session.title, "Script Editor - A");
}

#[test]
fn test_save_stores_text_verbatim() {
    let (mut editor, a) = editor_with_sprite();
    editor.select_sprite(a);
    editor.edit_script_of_selected();

    let text = "  if x > 3:\n\tmove(1)\n\n// ünïcode \u{1F600}  ";
    assert!(editor.save_script(text));

    assert!(editor.script_editor.is_none());
    assert_eq!(editor.scene.script(a).unwrap(), Some(text));
    assert_eq!(editor.inspector().unwrap().script_button_label, "Edit Script");
    assert!(editor.outline()[0].has_script);
}

#[test]
fn test_reopen_shows_saved_script() {
    let (mut editor, a) = editor_with_sprite();
    editor.select_sprite(a);
    editor.edit_script_of_selected();
    editor.save_script("on_tick()");

    let session = editor.edit_script_of_selected().unwrap();
    assert_eq!(session.text, "on_tick()");
}

#[test]
fn test_cancel_leaves_script_unchanged() {
    let (mut editor, a) = editor_with_sprite();
    editor.select_sprite(a);
    editor.edit_script_of_selected();
    editor.save_script("first");

    editor.edit_script_of_selected();
    editor.cancel_script_edit();

    assert!(editor.script_editor.is_none());
    assert_eq!(editor.scene.script(a).unwrap(), Some("first"));
    assert!(!editor.save_script("second"));
    assert_eq!(editor.scene.script(a).unwrap(), Some("first"));
}

#[test]
fn test_empty_text_is_still_a_script() {
    let (mut editor, a) = editor_with_sprite();
    editor.select_sprite(a);
    editor.edit_script_of_selected();
    editor.save_script("");

    assert_eq!(editor.scene.script(a).unwrap(), Some(""));
    assert!(editor.scene.get(a).unwrap().has_script());
}

#[test]
fn test_no_selection_opens_nothing() {
    let (mut editor, _) = editor_with_sprite();
    assert!(editor.edit_script_of_selected().is_none());
    assert!(editor.script_editor.is_none());
}

#[test]
fn test_saving_for_removed_sprite_reports_error() {
    let (mut editor, a) = editor_with_sprite();
    editor.select_sprite(a);
    editor.edit_script_of_selected();
    editor.remove_selected();

    assert!(!editor.save_script("orphan"));
    assert!(editor.script_editor.is_none());
    assert_eq!(editor.toasts.latest().unwrap().variant, ToastVariant::Error);
}
