//! End-to-end isometric scenarios.
//!
//! The isometric view reuses the elevation bay sequence; these scenarios pin
//! the skew geometry and check that both projections agree on bay content.

use scene_engine::{compose, compose_elevation, compose_isometric};
use test_harness::{
    assert_paint_order, assert_role_subset, assert_viewport_contains_all, equal_spec,
    mixed_layouts, single_rail_layouts,
};
use wardrobe_types::{DetailLevel, Primitive, Projection, RenderPolicy, Role};

// ── Scenario 1: Skewed faces at 600 mm depth ────────────────────────────

#[test]
fn skewed_faces_at_600_depth() {
    let spec = equal_spec(2400, 2400, 600, 0, single_rail_layouts(4)).unwrap();
    let scene = compose_isometric(&spec, DetailLevel::Customer).unwrap();

    // dx = 0.55 * 600, dy = 0.30 * 600.
    match scene.with_role(&Role::TopFace).next().unwrap() {
        Primitive::Polygon { points, .. } => assert_eq!(
            points,
            &vec![
                [0.0, 2400.0],
                [2400.0, 2400.0],
                [2730.0, 2580.0],
                [330.0, 2580.0],
            ]
        ),
        other => panic!("expected the top face polygon, got {:?}", other),
    }
    match scene.with_role(&Role::SideFace).next().unwrap() {
        Primitive::Polygon { points, .. } => assert_eq!(
            points,
            &vec![
                [2400.0, 0.0],
                [2400.0, 2400.0],
                [2730.0, 2580.0],
                [2730.0, 180.0],
            ]
        ),
        other => panic!("expected the side face polygon, got {:?}", other),
    }

    assert_paint_order(&scene, "skewed faces").unwrap();
    assert_viewport_contains_all(&scene, "skewed faces").unwrap();
}

// ── Scenario 2: Shallow and deep carcasses skew proportionally ──────────

#[test]
fn skew_scales_with_depth() {
    let shallow = equal_spec(1200, 2000, 300, 0, single_rail_layouts(2)).unwrap();
    let deep = equal_spec(1200, 2000, 800, 0, single_rail_layouts(2)).unwrap();

    let top_right_x = |spec| {
        let scene = compose_isometric(spec, DetailLevel::Customer).unwrap();
        let top_face = scene.with_role(&Role::TopFace).next().unwrap();
        match top_face {
            Primitive::Polygon { points, .. } => points[2][0],
            other => panic!("expected the top face polygon, got {:?}", other),
        }
    };

    assert_eq!(top_right_x(&shallow), 1200.0 + 0.55 * 300.0);
    assert_eq!(top_right_x(&deep), 1200.0 + 0.55 * 800.0);
}

// ── Scenario 3: Front-face internals match the elevation ────────────────

#[test]
fn installer_internals_match_elevation() {
    let spec = equal_spec(2700, 2400, 600, 0, mixed_layouts()).unwrap();
    let elevation = compose_elevation(&spec, DetailLevel::Installer).unwrap();
    let isometric = compose_isometric(&spec, DetailLevel::Installer).unwrap();

    // Every internal the elevation draws appears identically in the
    // isometric front face; the two views share one builder.
    for role in [
        Role::HangRail,
        Role::ShelfHint,
        Role::MidDivider,
        Role::TopRail,
        Role::BottomRail,
        Role::TowerOutline,
        Role::TowerRail,
    ] {
        let from_elevation: Vec<_> = elevation.with_role(&role).collect();
        let from_isometric: Vec<_> = isometric.with_role(&role).collect();
        assert_eq!(
            from_elevation, from_isometric,
            "projections disagree on {:?}",
            role
        );
    }
}

// ── Scenario 4: Customer cue reduction stays a subset ───────────────────

#[test]
fn customer_cues_are_a_subset_of_installer() {
    let spec = equal_spec(2700, 2400, 600, 100, mixed_layouts()).unwrap();
    let customer = compose_isometric(&spec, DetailLevel::Customer).unwrap();
    let installer = compose_isometric(&spec, DetailLevel::Installer).unwrap();

    assert_role_subset(&customer, &installer, "isometric cue reduction").unwrap();

    // The double bay keeps exactly its mid divider as the cue.
    assert_eq!(customer.with_role(&Role::MidDivider).count(), 1);
    assert_eq!(customer.with_role(&Role::TopRail).count(), 0);
    assert_eq!(installer.with_role(&Role::TopRail).count(), 1);
}

// ── Scenario 5: Identical calls, identical scenes ───────────────────────

#[test]
fn repeated_compose_calls_are_bit_identical() {
    let spec = equal_spec(2700, 2400, 600, 100, mixed_layouts()).unwrap();
    for projection in [Projection::Elevation, Projection::Isometric] {
        for detail in [DetailLevel::Customer, DetailLevel::Installer] {
            let policy = RenderPolicy { detail, projection };
            let first = compose(&spec, &policy).unwrap();
            let second = compose(&spec, &policy).unwrap();
            assert_eq!(first, second, "compose must be pure");
        }
    }
}
