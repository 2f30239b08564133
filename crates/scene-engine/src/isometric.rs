use tracing::{debug, instrument};
use wardrobe_types::{
    DetailLevel, LabelAnchor, Primitive, Role, Scene, ScenePrimitive, Viewport, WardrobeSpec,
};

use crate::bays::{build_bay, translate_bay};
use crate::constants::{
    BOTTOM_MARGIN_FACTOR, CARCASS_STROKE, DIVIDER_STROKE, LABEL_DROP, LABEL_FONT_SIZE,
    SIDE_MARGIN_FACTOR, TOP_MARGIN_FACTOR,
};
use crate::types::ComposeError;
use crate::validate::validate;

/// Skew of the depth axis: how far a point at full depth shifts right.
pub const ISO_SKEW_X_FACTOR: f64 = 0.55;
/// Skew of the depth axis: how far a point at full depth shifts up.
pub const ISO_SKEW_Y_FACTOR: f64 = 0.30;

/// Compose the depth-offset pseudo-3D view.
///
/// The front face is the elevation carcass; a top and a side face are
/// synthesized by skewing the depth axis by a fixed `(dx, dy)`. Bay internals
/// stay on the front face only. At customer detail each bay's internal lines
/// are reduced to one indicative cue; that cue is always part of the fuller
/// installer set.
#[instrument(skip(spec), fields(bays = spec.bays.len()))]
pub fn compose_isometric(
    spec: &WardrobeSpec,
    detail: DetailLevel,
) -> Result<Scene, ComposeError> {
    validate(spec)?;

    let width = f64::from(spec.total_width_mm);
    let height = f64::from(spec.total_height_mm);
    let plinth = f64::from(spec.plinth_height_mm);
    let depth = f64::from(spec.depth_mm);
    let dx = depth * ISO_SKEW_X_FACTOR;
    let dy = depth * ISO_SKEW_Y_FACTOR;

    let mut primitives = vec![
        ScenePrimitive::new(
            Role::CarcassOutline,
            Primitive::Rect {
                x: 0.0,
                y: 0.0,
                width,
                height,
                stroke_weight: CARCASS_STROKE,
            },
        ),
        ScenePrimitive::new(
            Role::TopFace,
            Primitive::Polygon {
                points: vec![
                    [0.0, height],
                    [width, height],
                    [width + dx, height + dy],
                    [dx, height + dy],
                ],
                stroke_weight: CARCASS_STROKE,
            },
        ),
        ScenePrimitive::new(
            Role::SideFace,
            Primitive::Polygon {
                points: vec![
                    [width, 0.0],
                    [width, height],
                    [width + dx, height + dy],
                    [width + dx, dy],
                ],
                stroke_weight: CARCASS_STROKE,
            },
        ),
    ];
    let mut labels = Vec::new();

    if spec.plinth_height_mm > 0 {
        primitives.push(ScenePrimitive::new(
            Role::Plinth,
            Primitive::Rect {
                x: 0.0,
                y: 0.0,
                width,
                height: plinth,
                stroke_weight: DIVIDER_STROKE,
            },
        ));
    }

    let mut dividers = Vec::new();
    let mut internals = Vec::new();
    let mut bay_x = 0.0;
    for (i, bay) in spec.bays.iter().enumerate() {
        if i > 0 {
            dividers.push(ScenePrimitive::new(
                Role::BayDivider { index: i },
                Primitive::Line {
                    x1: bay_x,
                    y1: plinth,
                    x2: bay_x,
                    y2: height,
                    stroke_weight: DIVIDER_STROKE,
                },
            ));
            // Echo the divider onto the top face so the depth reads.
            dividers.push(ScenePrimitive::new(
                Role::DepthCue { index: i },
                Primitive::Line {
                    x1: bay_x,
                    y1: height,
                    x2: bay_x + dx,
                    y2: height + dy,
                    stroke_weight: DIVIDER_STROKE,
                },
            ));
        }

        let built = build_bay(bay, spec.total_height_mm, spec.plinth_height_mm, detail)?;
        let built = match detail {
            DetailLevel::Customer => reduce_to_cue(built),
            DetailLevel::Installer => built,
        };
        internals.extend(translate_bay(built, bay_x));

        if detail == DetailLevel::Installer {
            labels.push(ScenePrimitive::new(
                Role::WidthLabel { bay: i + 1 },
                Primitive::Label {
                    x: bay_x + f64::from(bay.width_mm) / 2.0,
                    y: -LABEL_DROP,
                    text: format!("Bay {}\n{} mm", i + 1, bay.width_mm),
                    anchor: LabelAnchor::TopCenter,
                    font_size: LABEL_FONT_SIZE,
                },
            ));
        }

        bay_x += f64::from(bay.width_mm);
    }

    primitives.extend(dividers);
    primitives.extend(internals);
    primitives.extend(labels);

    let scene = Scene {
        viewport: viewport_for(width, height, dx, dy),
        title: format!(
            "Wardrobe {} x {} mm, isometric",
            spec.total_width_mm, spec.total_height_mm
        ),
        primitives,
    };
    debug!(primitives = scene.primitives.len(), "composed isometric");
    Ok(scene)
}

/// Keep each bay's non-line internals plus its first line.
///
/// The first line a builder emits is its most telling one (the rail, the mid
/// divider, the first drawer split), so the customer view keeps exactly that.
fn reduce_to_cue(primitives: Vec<ScenePrimitive>) -> Vec<ScenePrimitive> {
    let mut line_seen = false;
    primitives
        .into_iter()
        .filter(|p| match p.primitive {
            Primitive::Line { .. } => {
                if line_seen {
                    false
                } else {
                    line_seen = true;
                    true
                }
            }
            _ => true,
        })
        .collect()
}

fn viewport_for(width: f64, height: f64, dx: f64, dy: f64) -> Viewport {
    let side = width * SIDE_MARGIN_FACTOR;
    Viewport {
        min_x: -side,
        min_y: -height * BOTTOM_MARGIN_FACTOR,
        max_x: width + dx + side,
        max_y: height + dy + height * TOP_MARGIN_FACTOR,
    }
}
