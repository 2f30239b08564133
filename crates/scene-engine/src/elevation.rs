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

/// Compose the straight-on elevation view.
///
/// Bays are laid left to right; each bay after the first gets a vertical
/// divider at its left edge. Labels are collected separately and appended
/// last so they always paint on top.
#[instrument(skip(spec), fields(bays = spec.bays.len()))]
pub fn compose_elevation(
    spec: &WardrobeSpec,
    detail: DetailLevel,
) -> Result<Scene, ComposeError> {
    validate(spec)?;

    let width = f64::from(spec.total_width_mm);
    let height = f64::from(spec.total_height_mm);
    let plinth = f64::from(spec.plinth_height_mm);

    let mut primitives = vec![ScenePrimitive::new(
        Role::CarcassOutline,
        Primitive::Rect {
            x: 0.0,
            y: 0.0,
            width,
            height,
            stroke_weight: CARCASS_STROKE,
        },
    )];
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
        if detail == DetailLevel::Installer {
            labels.push(ScenePrimitive::new(
                Role::PlinthLabel,
                Primitive::Label {
                    x: width / 2.0,
                    y: plinth / 2.0,
                    text: format!("Plinth {} mm", spec.plinth_height_mm),
                    anchor: LabelAnchor::Center,
                    font_size: LABEL_FONT_SIZE,
                },
            ));
        }
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
        }

        let built = build_bay(bay, spec.total_height_mm, spec.plinth_height_mm, detail)?;
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
        viewport: viewport_for(width, height),
        title: format!(
            "Wardrobe {} x {} mm, elevation",
            spec.total_width_mm, spec.total_height_mm
        ),
        primitives,
    };
    debug!(primitives = scene.primitives.len(), "composed elevation");
    Ok(scene)
}

fn viewport_for(width: f64, height: f64) -> Viewport {
    let side = width * SIDE_MARGIN_FACTOR;
    Viewport {
        min_x: -side,
        min_y: -height * BOTTOM_MARGIN_FACTOR,
        max_x: width + side,
        max_y: height * (1.0 + TOP_MARGIN_FACTOR),
    }
}
