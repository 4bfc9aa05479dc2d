//! Integration tests for the outline sidebar and dragging entries onto the
//! canvas.

use crate::helpers::{editor_with_sprite, position_of};

#[test]
fn test_outline_lists_sprites_in_draw_order() {
    let (mut editor, a) = editor_with_sprite();
    let b = editor.create_sprite("B", 300.0, 300.0);
    editor.select_sprite(b);

    let outline = editor.outline();
    assert_eq!(outline.len(), 2);
    assert_eq!((outline[0].id, outline[0].name.as_str()), (a, "A"));
    assert_eq!((outline[1].id, outline[1].name.as_str()), (b, "B"));
    assert!(!outline[0].selected);
    assert!(outline[1].selected);
}

#[test]
fn test_select_from_outline_fills_inspector() {
    let (mut editor, a) = editor_with_sprite();
    assert!(editor.select_from_outline(a));

    let view = editor.inspector().unwrap();
    assert_eq!(view.id, a);
    assert_eq!(view.name, "A");
    assert_eq!((view.x, view.y), (100.0, 100.0));
    assert_eq!((view.width, view.height), (50.0, 50.0));
    assert_eq!(view.color, "#ffffff");
    assert!(view.draggable);
    assert!(!view.has_texture);
}

#[test]
fn test_drop_on_canvas_places_copy() {
    let (mut editor, a) = editor_with_sprite();
    editor.press_outline_entry(a);
    assert_eq!(editor.scene.selected(), Some(a));

    let copy = editor.release_outline_drag((350.0, 120.0)).unwrap();

    assert_eq!(position_of(&editor.scene, copy), (150.0, 120.0));
    assert_eq!(editor.scene.get(copy).unwrap().name, "A_copy");
    assert_eq!(position_of(&editor.scene, a), (100.0, 100.0));
    assert!(editor.outline_drag.is_none());
}

#[test]
fn test_drop_outside_canvas_cancels() {
    let (mut editor, a) = editor_with_sprite();

    for pos in [(150.0, 120.0), (200.0, 120.0), (350.0, 600.0), (1100.0, 10.0)] {
        editor.press_outline_entry(a);
        assert!(editor.release_outline_drag(pos).is_none(), "at {pos:?}");
    }
    assert_eq!(editor.scene.len(), 1);
}

#[test]
fn test_release_without_press() {
    let (mut editor, _) = editor_with_sprite();
    assert!(editor.release_outline_drag((350.0, 120.0)).is_none());
}

#[test]
fn test_cancel_outline_drag() {
    let (mut editor, a) = editor_with_sprite();
    editor.press_outline_entry(a);
    editor.cancel_outline_drag();
    assert!(editor.release_outline_drag((350.0, 120.0)).is_none());
    assert_eq!(editor.scene.len(), 1);
}

#[test]
fn test_removing_source_cancels_outline_drag() {
    let (mut editor, a) = editor_with_sprite();
    editor.press_outline_entry(a);
    editor.remove_selected();

    assert!(editor.outline_drag.is_none());
    assert!(editor.release_outline_drag((350.0, 120.0)).is_none());
    assert!(editor.scene.is_empty());
}
