use wardrobe_types::{DetailLevel, Primitive, Role, ScenePrimitive};

use crate::clamp::clamp_mm;
use crate::constants::{
    DRAWER_SPLIT_STROKE, HINT_STROKE, INTERNAL_STROKE, RAIL_SPAN_FACTOR, TOWER_CEIL_MARGIN,
    TOWER_MIN_HEIGHT, TOWER_RAIL_CLEARANCE, TOWER_RAIL_LIFT, TOWER_WIDTH_FACTOR,
};
use crate::types::{centered_span, LayoutError};

/// Build the internals of a drawer-tower bay.
///
/// A bottom-aligned tower outline sitting on the plinth, subdivided into
/// `drawer_count` fronts by evenly spaced split lines. At installer detail a
/// rail hint is drawn above the tower when there is enough clearance to the
/// carcass top; with less clearance the hint is omitted rather than drawn out
/// of bounds.
pub fn build_drawer_tower(
    drawer_count: u32,
    tower_height_mm: u32,
    bay_width_mm: u32,
    carcass_height_mm: u32,
    plinth_height_mm: u32,
    detail: DetailLevel,
) -> Result<Vec<ScenePrimitive>, LayoutError> {
    if drawer_count == 0 {
        return Err(LayoutError::DrawerCountZero);
    }

    let width = f64::from(bay_width_mm);
    let height = f64::from(carcass_height_mm);
    let plinth = f64::from(plinth_height_mm);

    let tower_height = clamp_mm(
        f64::from(tower_height_mm),
        TOWER_MIN_HEIGHT,
        height - plinth - TOWER_CEIL_MARGIN,
    )?;

    let (x1, x2) = centered_span(width, TOWER_WIDTH_FACTOR);
    let mut primitives = vec![ScenePrimitive::new(
        Role::TowerOutline,
        Primitive::Rect {
            x: x1,
            y: plinth,
            width: x2 - x1,
            height: tower_height,
            stroke_weight: INTERNAL_STROKE,
        },
    )];

    for i in 1..drawer_count {
        let y = plinth + tower_height * f64::from(i) / f64::from(drawer_count);
        primitives.push(ScenePrimitive::new(
            Role::DrawerSplit { index: i as usize },
            Primitive::Line {
                x1,
                y1: y,
                x2,
                y2: y,
                stroke_weight: DRAWER_SPLIT_STROKE,
            },
        ));
    }

    if detail == DetailLevel::Installer {
        let tower_top = plinth + tower_height;
        if height - tower_top >= TOWER_RAIL_CLEARANCE {
            let rail_y = tower_top + TOWER_RAIL_LIFT;
            let (rx1, rx2) = centered_span(width, RAIL_SPAN_FACTOR);
            primitives.push(ScenePrimitive::new(
                Role::TowerRail,
                Primitive::Line {
                    x1: rx1,
                    y1: rail_y,
                    x2: rx2,
                    y2: rail_y,
                    stroke_weight: HINT_STROKE,
                },
            ));
        }
    }

    Ok(primitives)
}
