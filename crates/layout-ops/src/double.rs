use wardrobe_types::{DetailLevel, Primitive, Role, ScenePrimitive};

use crate::clamp::clamp_mm;
use crate::constants::{
    DOUBLE_BOTTOM_RAIL_CEIL_MARGIN, DOUBLE_BOTTOM_RAIL_FLOOR_OFFSET, DOUBLE_BOTTOM_RAIL_OFFSET,
    DOUBLE_MID_CEIL_MARGIN, DOUBLE_MID_FLOOR_MARGIN, DOUBLE_MID_HEIGHT_FACTOR,
    DOUBLE_TOP_RAIL_CEIL_MARGIN, DOUBLE_TOP_RAIL_FLOOR_OFFSET, DOUBLE_TOP_RAIL_OFFSET,
    INTERNAL_STROKE, RAIL_SPAN_FACTOR,
};
use crate::types::{centered_span, LayoutError};

/// Resolve the mid-divider height of a double-rail bay.
///
/// The override is clamped into the carcass before anything derives from it;
/// both rails are positioned relative to the clamped value, never the raw
/// request.
pub fn mid_divider_height(
    override_mm: Option<u32>,
    carcass_height_mm: u32,
    plinth_height_mm: u32,
) -> Result<f64, LayoutError> {
    let height = f64::from(carcass_height_mm);
    let plinth = f64::from(plinth_height_mm);
    let requested = override_mm
        .map(f64::from)
        .unwrap_or(height * DOUBLE_MID_HEIGHT_FACTOR);
    clamp_mm(
        requested,
        plinth + DOUBLE_MID_FLOOR_MARGIN,
        height - DOUBLE_MID_CEIL_MARGIN,
    )
}

/// Resolve the top-rail height above a resolved mid divider.
pub fn top_rail_height(mid_mm: f64, carcass_height_mm: u32) -> Result<f64, LayoutError> {
    clamp_mm(
        mid_mm + DOUBLE_TOP_RAIL_OFFSET,
        mid_mm + DOUBLE_TOP_RAIL_FLOOR_OFFSET,
        f64::from(carcass_height_mm) - DOUBLE_TOP_RAIL_CEIL_MARGIN,
    )
}

/// Resolve the bottom-rail height below a resolved mid divider.
pub fn bottom_rail_height(mid_mm: f64, plinth_height_mm: u32) -> Result<f64, LayoutError> {
    let plinth = f64::from(plinth_height_mm);
    clamp_mm(
        plinth + DOUBLE_BOTTOM_RAIL_OFFSET,
        plinth + DOUBLE_BOTTOM_RAIL_FLOOR_OFFSET,
        mid_mm - DOUBLE_BOTTOM_RAIL_CEIL_MARGIN,
    )
}

/// Build the internals of a double-rail bay.
///
/// A full-width mid divider with one hanging rail above it and one below.
/// A mid divider close enough to the plinth (or the carcass top) that a rail
/// window collapses is a rejected configuration, not a degenerate drawing.
pub fn build_double(
    mid_divider_height_mm: Option<u32>,
    bay_width_mm: u32,
    carcass_height_mm: u32,
    plinth_height_mm: u32,
    _detail: DetailLevel,
) -> Result<Vec<ScenePrimitive>, LayoutError> {
    let width = f64::from(bay_width_mm);

    let mid = mid_divider_height(mid_divider_height_mm, carcass_height_mm, plinth_height_mm)?;
    let top = top_rail_height(mid, carcass_height_mm)?;
    let bottom = bottom_rail_height(mid, plinth_height_mm)?;

    let (x1, x2) = centered_span(width, RAIL_SPAN_FACTOR);

    Ok(vec![
        ScenePrimitive::new(
            Role::MidDivider,
            Primitive::Line {
                x1: 0.0,
                y1: mid,
                x2: width,
                y2: mid,
                stroke_weight: INTERNAL_STROKE,
            },
        ),
        ScenePrimitive::new(
            Role::TopRail,
            Primitive::Line {
                x1,
                y1: top,
                x2,
                y2: top,
                stroke_weight: INTERNAL_STROKE,
            },
        ),
        ScenePrimitive::new(
            Role::BottomRail,
            Primitive::Line {
                x1,
                y1: bottom,
                x2,
                y2: bottom,
                stroke_weight: INTERNAL_STROKE,
            },
        ),
    ])
}
