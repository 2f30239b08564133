//! Rich assertion helpers with diagnostic output.
//!
//! Every failure names the offending role and the expected versus actual
//! geometry, so a broken scenario reads without a debugger.

use wardrobe_types::{Primitive, Role, Scene};

use crate::helpers::HarnessError;

/// Assert that every role in `subset` appears in `superset` at least as
/// often. This is the detail-policy invariant: customer scenes never carry a
/// part the installer scene lacks.
pub fn assert_role_subset(
    subset: &Scene,
    superset: &Scene,
    ctx: &str,
) -> Result<(), HarnessError> {
    for p in &subset.primitives {
        let in_subset = subset
            .primitives
            .iter()
            .filter(|q| q.role == p.role)
            .count();
        let in_superset = superset
            .primitives
            .iter()
            .filter(|q| q.role == p.role)
            .count();
        if in_superset < in_subset {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] role {:?} appears {} times in the subset scene but {} in the superset",
                    ctx, p.role, in_subset, in_superset,
                ),
            });
        }
    }
    Ok(())
}

/// Assert that every internal line's y coordinates lie inside
/// `[plinth_mm, height_mm]`. Faces, echoes, and labels are exempt; rails,
/// shelves, dividers, and splits are not.
pub fn assert_band_containment(
    scene: &Scene,
    plinth_mm: f64,
    height_mm: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    for p in &scene.primitives {
        let banded = matches!(
            p.role,
            Role::HangRail
                | Role::ShelfHint
                | Role::MidDivider
                | Role::TopRail
                | Role::BottomRail
                | Role::DrawerSplit { .. }
                | Role::TowerRail
                | Role::BayDivider { .. }
        );
        if !banded {
            continue;
        }
        if let Primitive::Line { y1, y2, .. } = p.primitive {
            let inside =
                y1 >= plinth_mm && y1 <= height_mm && y2 >= plinth_mm && y2 <= height_mm;
            if !inside {
                return Err(HarnessError::AssertionFailed {
                    detail: format!(
                        "[{}] {:?} at y {}..{} leaves the band {}..{}",
                        ctx, p.role, y1, y2, plinth_mm, height_mm,
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Assert that every primitive's extent lies inside the scene's viewport.
pub fn assert_viewport_contains_all(scene: &Scene, ctx: &str) -> Result<(), HarnessError> {
    for p in &scene.primitives {
        let (min_x, min_y, max_x, max_y) = p.primitive.extent();
        if !scene.viewport.contains(min_x, min_y) || !scene.viewport.contains(max_x, max_y) {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] {:?} with extent ({}, {})..({}, {}) spills out of viewport {:?}",
                    ctx, p.role, min_x, min_y, max_x, max_y, scene.viewport,
                ),
            });
        }
    }
    Ok(())
}

/// Assert the paint-order contract: the carcass outline first, labels in one
/// contiguous run at the end.
pub fn assert_paint_order(scene: &Scene, ctx: &str) -> Result<(), HarnessError> {
    if scene.primitives.first().map(|p| &p.role) != Some(&Role::CarcassOutline) {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] the carcass outline must paint first, got {:?}",
                ctx,
                scene.primitives.first().map(|p| &p.role),
            ),
        });
    }

    let mut label_seen = false;
    for p in &scene.primitives {
        let is_label = matches!(p.primitive, Primitive::Label { .. });
        if label_seen && !is_label {
            return Err(HarnessError::AssertionFailed {
                detail: format!("[{}] {:?} paints after a label", ctx, p.role),
            });
        }
        label_seen |= is_label;
    }
    Ok(())
}
