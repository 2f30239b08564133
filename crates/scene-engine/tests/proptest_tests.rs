//! Property-based tests for the layout invariants using the `proptest` crate.

use proptest::prelude::*;

use scene_engine::{compose, plan_bays};
use wardrobe_types::{
    DetailLevel, LayoutParams, Primitive, Projection, RenderPolicy, Role, WardrobeSpec,
};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Overall width in the catalogue range.
fn arb_total_width() -> impl Strategy<Value = u32> {
    600u32..12000
}

/// Carcass height in the catalogue range.
fn arb_height() -> impl Strategy<Value = u32> {
    1800u32..3000
}

/// Depth in the catalogue range.
fn arb_depth() -> impl Strategy<Value = u32> {
    300u32..800
}

/// Plinth height, 0 meaning none.
fn arb_plinth() -> impl Strategy<Value = u32> {
    0u32..200
}

/// A layout with defaulted parameters. Defaults never produce an empty clamp
/// window inside the catalogue ranges, so built bays are always drawable.
fn arb_layout() -> impl Strategy<Value = LayoutParams> {
    prop_oneof![
        Just(LayoutParams::Single {
            rail_height_mm: None
        }),
        Just(LayoutParams::Double {
            mid_divider_height_mm: None
        }),
        (1u32..6, 400u32..1400).prop_map(|(drawer_count, tower_height_mm)| {
            LayoutParams::DrawerTower {
                drawer_count,
                tower_height_mm,
            }
        }),
    ]
}

fn arb_layouts() -> impl Strategy<Value = Vec<LayoutParams>> {
    prop::collection::vec(arb_layout(), 1..8)
}

/// Positive allocation weights.
fn arb_weights(count: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..100.0, count)
}

fn arb_spec() -> impl Strategy<Value = WardrobeSpec> {
    (
        arb_total_width(),
        arb_height(),
        arb_depth(),
        arb_plinth(),
        arb_layouts(),
    )
        .prop_map(|(total_width_mm, total_height_mm, depth_mm, plinth_height_mm, layouts)| {
            let bays = plan_bays(total_width_mm, layouts, None).expect("catalogue-range plan");
            WardrobeSpec {
                total_width_mm,
                total_height_mm,
                depth_mm,
                plinth_height_mm,
                bays,
            }
        })
}

fn arb_policy() -> impl Strategy<Value = RenderPolicy> {
    (
        prop_oneof![Just(DetailLevel::Customer), Just(DetailLevel::Installer)],
        prop_oneof![Just(Projection::Elevation), Just(Projection::Isometric)],
    )
        .prop_map(|(detail, projection)| RenderPolicy { detail, projection })
}

/// Roles whose lines must stay inside the carcass height band.
fn is_internal_role(role: &Role) -> bool {
    matches!(
        role,
        Role::HangRail
            | Role::ShelfHint
            | Role::MidDivider
            | Role::TopRail
            | Role::BottomRail
            | Role::DrawerSplit { .. }
            | Role::TowerRail
            | Role::BayDivider { .. }
    )
}

// ---------------------------------------------------------------------------
// 1. Allocation: exact sum and non-degeneracy
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn equal_allocation_sums_exactly(total in arb_total_width(), count in 1usize..8) {
        let widths = layout_ops::allocate(total, count, None).unwrap();
        prop_assert_eq!(widths.len(), count);
        prop_assert_eq!(widths.iter().sum::<u32>(), total);
        prop_assert!(widths.iter().all(|&w| w >= 1));
    }
}

proptest! {
    #[test]
    fn weighted_allocation_sums_exactly(
        total in arb_total_width(),
        weights in arb_weights(5),
    ) {
        let widths = layout_ops::allocate(total, 5, Some(&weights)).unwrap();
        prop_assert_eq!(widths.iter().sum::<u32>(), total);
        prop_assert!(widths.iter().all(|&w| w >= 1));
    }
}

proptest! {
    #[test]
    fn equal_allocation_is_balanced(total in arb_total_width(), count in 1usize..8) {
        let widths = layout_ops::allocate(total, count, None).unwrap();
        let min = widths.iter().min().unwrap();
        let max = widths.iter().max().unwrap();
        prop_assert!(max - min <= 1, "equal split never differs by more than 1 mm");
    }
}

// ---------------------------------------------------------------------------
// 2. Composition: idempotence
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn compose_is_referentially_transparent(spec in arb_spec(), policy in arb_policy()) {
        let first = compose(&spec, &policy).unwrap();
        let second = compose(&spec, &policy).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// 3. Clamp containment: internal lines stay inside the carcass band
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn internal_lines_stay_inside_carcass(spec in arb_spec(), policy in arb_policy()) {
        let scene = compose(&spec, &policy).unwrap();
        let plinth = f64::from(spec.plinth_height_mm);
        let height = f64::from(spec.total_height_mm);
        for p in &scene.primitives {
            if !is_internal_role(&p.role) {
                continue;
            }
            if let Primitive::Line { y1, y2, .. } = p.primitive {
                prop_assert!(
                    y1 >= plinth && y1 <= height && y2 >= plinth && y2 <= height,
                    "{:?} at y {}..{} leaves the band {}..{}",
                    p.role, y1, y2, plinth, height
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Detail policy: customer roles are a subset of installer roles
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn customer_is_a_role_subset_of_installer(
        spec in arb_spec(),
        projection in prop_oneof![Just(Projection::Elevation), Just(Projection::Isometric)],
    ) {
        let customer = compose(&spec, &RenderPolicy {
            detail: DetailLevel::Customer,
            projection,
        }).unwrap();
        let installer = compose(&spec, &RenderPolicy {
            detail: DetailLevel::Installer,
            projection,
        }).unwrap();

        for p in &customer.primitives {
            let in_customer = customer.primitives.iter().filter(|q| q.role == p.role).count();
            let in_installer = installer.primitives.iter().filter(|q| q.role == p.role).count();
            prop_assert!(
                in_installer >= in_customer,
                "role {:?} appears {} times at customer but {} at installer",
                p.role, in_customer, in_installer
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Viewport: every primitive fits
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn every_primitive_fits_the_viewport(spec in arb_spec(), policy in arb_policy()) {
        let scene = compose(&spec, &policy).unwrap();
        for p in &scene.primitives {
            let (min_x, min_y, max_x, max_y) = p.primitive.extent();
            prop_assert!(
                scene.viewport.contains(min_x, min_y) && scene.viewport.contains(max_x, max_y),
                "{:?} spills out of the viewport",
                p.role
            );
        }
    }
}
