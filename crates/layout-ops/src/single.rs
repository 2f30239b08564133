use wardrobe_types::{DetailLevel, Primitive, Role, ScenePrimitive};

use crate::clamp::clamp_mm;
use crate::constants::{
    HINT_STROKE, INTERNAL_STROKE, RAIL_SPAN_FACTOR, SHELF_HEIGHT_FACTOR,
    SINGLE_RAIL_CEIL_MARGIN, SINGLE_RAIL_FLOOR_MARGIN, SINGLE_RAIL_HEIGHT_FACTOR,
};
use crate::types::{centered_span, LayoutError};

/// Build the internals of a single-rail bay.
///
/// One hanging rail spanning most of the bay width, plus a shelf hint near
/// the carcass top at installer detail. All x coordinates are bay-local; the
/// composer translates into the carcass frame.
pub fn build_single(
    rail_height_mm: Option<u32>,
    bay_width_mm: u32,
    carcass_height_mm: u32,
    plinth_height_mm: u32,
    detail: DetailLevel,
) -> Result<Vec<ScenePrimitive>, LayoutError> {
    let width = f64::from(bay_width_mm);
    let height = f64::from(carcass_height_mm);
    let plinth = f64::from(plinth_height_mm);

    let requested = rail_height_mm
        .map(f64::from)
        .unwrap_or(height * SINGLE_RAIL_HEIGHT_FACTOR);
    let rail_y = clamp_mm(
        requested,
        plinth + SINGLE_RAIL_FLOOR_MARGIN,
        height - SINGLE_RAIL_CEIL_MARGIN,
    )?;

    let (x1, x2) = centered_span(width, RAIL_SPAN_FACTOR);
    let mut primitives = vec![ScenePrimitive::new(
        Role::HangRail,
        Primitive::Line {
            x1,
            y1: rail_y,
            x2,
            y2: rail_y,
            stroke_weight: INTERNAL_STROKE,
        },
    )];

    if detail == DetailLevel::Installer {
        let shelf_y = height * SHELF_HEIGHT_FACTOR;
        primitives.push(ScenePrimitive::new(
            Role::ShelfHint,
            Primitive::Line {
                x1,
                y1: shelf_y,
                x2,
                y2: shelf_y,
                stroke_weight: HINT_STROKE,
            },
        ));
    }

    Ok(primitives)
}
