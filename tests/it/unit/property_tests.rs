//! Unit tests for inspector property edits.

use crate::helpers::{position_of, MemoryImageLoader, TestSceneBuilder};
use spritedesk::{Color, SceneError, SpriteProperty};
use std::path::Path;

#[test]
fn test_set_name() {
    let (mut scene, ids) = TestSceneBuilder::new().with_sprite("A", (0.0, 0.0)).build();
    scene
        .set_property(ids[0], SpriteProperty::Name("Player".to_string()))
        .unwrap();
    assert_eq!(scene.get(ids[0]).unwrap().name, "Player");
}

#[test]
fn test_set_integer_coordinates() {
    let (mut scene, ids) = TestSceneBuilder::new().with_sprite("A", (0.0, 0.0)).build();
    scene.set_property(ids[0], SpriteProperty::X("42".to_string())).unwrap();
    scene.set_property(ids[0], SpriteProperty::Y("-7".to_string())).unwrap();
    assert_eq!(position_of(&scene, ids[0]), (42.0, -7.0));
}

#[test]
fn test_non_integer_x_is_rejected() {
    let (mut scene, ids) = TestSceneBuilder::new().with_sprite("A", (100.0, 100.0)).build();

    for bad in ["abc", "12.5", "", "1e3"] {
        let err = scene
            .set_property(ids[0], SpriteProperty::X(bad.to_string()))
            .unwrap_err();
        assert!(
            matches!(&err, SceneError::Validation { field: "x", value } if value == bad),
            "unexpected error for {bad:?}: {err}"
        );
        assert_eq!(position_of(&scene, ids[0]), (100.0, 100.0));
    }
}

#[test]
fn test_non_integer_y_is_rejected() {
    let (mut scene, ids) = TestSceneBuilder::new().with_sprite("A", (100.0, 100.0)).build();
    let err = scene
        .set_property(ids[0], SpriteProperty::Y("down".to_string()))
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(position_of(&scene, ids[0]), (100.0, 100.0));
}

#[test]
fn test_set_color() {
    let (mut scene, ids) = TestSceneBuilder::new().with_sprite("A", (0.0, 0.0)).build();
    scene
        .set_property(ids[0], SpriteProperty::Color("red".to_string()))
        .unwrap();
    assert_eq!(scene.get(ids[0]).unwrap().color, Color::rgb(0xff, 0, 0));

    let err = scene
        .set_property(ids[0], SpriteProperty::Color("#12".to_string()))
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(scene.get(ids[0]).unwrap().color, Color::rgb(0xff, 0, 0));
}

#[test]
fn test_set_draggable() {
    let (mut scene, ids) = TestSceneBuilder::new().with_sprite("A", (0.0, 0.0)).build();
    scene.set_property(ids[0], SpriteProperty::Draggable(false)).unwrap();
    assert!(!scene.get(ids[0]).unwrap().draggable);
    assert_eq!(scene.begin_drag(ids[0], (5.0, 5.0)).unwrap(), None);
}

#[test]
fn test_invalid_size_is_rejected() {
    let (mut scene, ids) = TestSceneBuilder::new().with_sprite("A", (0.0, 0.0)).build();
    for bad in ["0", "-5", "wide"] {
        let err = scene
            .set_property(ids[0], SpriteProperty::Width(bad.to_string()))
            .unwrap_err();
        assert!(err.is_validation());
    }
    assert_eq!(scene.get(ids[0]).unwrap().size, (50.0, 50.0));
}

#[test]
fn test_oversized_extent_rejected_on_textured_sprite() {
    let (mut scene, ids) = TestSceneBuilder::new().with_sprite("A", (0.0, 0.0)).build();
    let loader = MemoryImageLoader {
        width: 4,
        height: 4,
        ..MemoryImageLoader::default()
    };
    scene.load_image(ids[0], Path::new("/img/a.png"), &loader).unwrap();

    for bad in ["4294967295", "8193", "100000"] {
        let err = scene
            .set_property(ids[0], SpriteProperty::Width(bad.to_string()))
            .unwrap_err();
        assert!(matches!(&err, SceneError::Validation { field: "width", .. }));
        let err = scene
            .set_property(ids[0], SpriteProperty::Height(bad.to_string()))
            .unwrap_err();
        assert!(err.is_validation());
    }

    let sprite = scene.get(ids[0]).unwrap();
    assert_eq!(sprite.size, (50.0, 50.0));
    assert_eq!(sprite.texture.as_ref().unwrap().dimensions(), (50, 50));

    scene
        .set_property(ids[0], SpriteProperty::Width("8192".to_string()))
        .unwrap();
    assert_eq!(scene.get(ids[0]).unwrap().size, (8192.0, 50.0));
}

#[test]
fn test_coordinates_beyond_float_precision_rejected() {
    let (mut scene, ids) = TestSceneBuilder::new().with_sprite("A", (100.0, 100.0)).build();

    for bad in ["16777217", "-16777217", "2147483647"] {
        let err = scene
            .set_property(ids[0], SpriteProperty::X(bad.to_string()))
            .unwrap_err();
        assert!(err.is_validation());
    }
    assert_eq!(position_of(&scene, ids[0]), (100.0, 100.0));

    scene
        .set_property(ids[0], SpriteProperty::Y("-16777216".to_string()))
        .unwrap();
    assert_eq!(position_of(&scene, ids[0]), (100.0, -16777216.0));
}

#[test]
fn test_property_on_missing_sprite() {
    let (mut scene, ids) = TestSceneBuilder::new().with_sprite("A", (0.0, 0.0)).build();
    scene.remove(ids[0]).unwrap();

    let err = scene
        .set_property(ids[0], SpriteProperty::X("abc".to_string()))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_field_names() {
    assert_eq!(SpriteProperty::X(String::new()).field_name(), "x");
    assert_eq!(SpriteProperty::Draggable(true).field_name(), "draggable");
}
