use layout_ops::{build_double, build_drawer_tower, build_single, LayoutError};
use wardrobe_types::{BaySpec, DetailLevel, LayoutParams, ScenePrimitive};

/// Build one bay's internals via the per-variant builders.
///
/// Both composers share this dispatch, so the elevation and isometric views
/// can never drift apart on what a bay contains. The match is exhaustive: a
/// new layout variant will not compile until it builds.
pub fn build_bay(
    bay: &BaySpec,
    carcass_height_mm: u32,
    plinth_height_mm: u32,
    detail: DetailLevel,
) -> Result<Vec<ScenePrimitive>, LayoutError> {
    match &bay.layout {
        LayoutParams::Single { rail_height_mm } => build_single(
            *rail_height_mm,
            bay.width_mm,
            carcass_height_mm,
            plinth_height_mm,
            detail,
        ),
        LayoutParams::Double {
            mid_divider_height_mm,
        } => build_double(
            *mid_divider_height_mm,
            bay.width_mm,
            carcass_height_mm,
            plinth_height_mm,
            detail,
        ),
        LayoutParams::DrawerTower {
            drawer_count,
            tower_height_mm,
        } => build_drawer_tower(
            *drawer_count,
            *tower_height_mm,
            bay.width_mm,
            carcass_height_mm,
            plinth_height_mm,
            detail,
        ),
    }
}

/// Translate bay-local primitives to the bay's position in the carcass frame.
pub fn translate_bay(primitives: Vec<ScenePrimitive>, bay_x: f64) -> Vec<ScenePrimitive> {
    primitives
        .into_iter()
        .map(|p| p.translated(bay_x, 0.0))
        .collect()
}
