//! Integration tests for strata_core crate
//!
//! Builds trees through the public API and pushes them through merge and serde

use strata_core::prelude::*;

fn scene_origin() -> Property {
    let mut origin = Property::None;
    let root = origin.get_or_create_mut("root").unwrap();
    root.get_or_create_mut("properties").unwrap().set("id", "root").unwrap();
    let position = root
        .get_or_create_mut("properties")
        .unwrap()
        .get_or_create_mut("location")
        .unwrap()
        .get_or_create_mut("position")
        .unwrap();
    position.set("x", 0.0).unwrap();
    position.set("y", 0.0).unwrap();
    origin
}

#[test]
fn test_diff_converges_origin() {
    let mut origin = scene_origin();

    let mut diff = Property::None;
    diff.get_or_create_mut("root")
        .and_then(|p| p.get_or_create_mut("properties"))
        .and_then(|p| p.get_or_create_mut("location"))
        .and_then(|p| p.get_or_create_mut("position"))
        .and_then(|p| p.set("x", 4.5))
        .unwrap();

    Property::replace(&mut origin, diff).unwrap();

    let position = origin
        .get("root")
        .and_then(|p| p.get("properties"))
        .and_then(|p| p.get("location"))
        .and_then(|p| p.get("position"))
        .unwrap();
    assert_eq!(position.get("x").unwrap().as_double().unwrap(), 4.5);
    assert_eq!(position.get("y").unwrap().as_double().unwrap(), 0.0);
}

#[test]
fn test_copy_preserves_equality_and_independence() {
    let original = scene_origin();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.get_or_create_mut("root").unwrap().set("extra", true).unwrap();
    assert_ne!(copy, original);
    assert!(original.get("root").unwrap().get("extra").unwrap().is_none());
}

#[test]
fn test_json_round_trip_keeps_structure() {
    let origin = scene_origin();
    let text = serde_json::to_string(&origin).unwrap();
    let back: Property = serde_json::from_str(&text).unwrap();
    assert_eq!(back, origin);
}

#[test]
fn test_type_error_surfaces_through_nested_access() {
    let origin = scene_origin();
    let id = origin.get("root").and_then(|p| p.get("properties")).and_then(|p| p.get("id")).unwrap();

    assert_eq!(id.as_str().unwrap(), "root");
    let err = id.get("nested").unwrap_err();
    assert!(matches!(
        err,
        PropertyError::Cast {
            expected: "dictionary",
            found: PropertyType::String
        }
    ));
}
