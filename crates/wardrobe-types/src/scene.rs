use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// A drawable geometric primitive.
///
/// Coordinates are f64 millimetres in the carcass-local frame: origin at the
/// bottom-left of the carcass, y up. The consuming renderer owns all mapping
/// to pixels; the engine never leaves millimetre space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stroke_weight: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_weight: f64,
    },
    Polygon {
        points: Vec<[f64; 2]>,
        stroke_weight: f64,
    },
    Label {
        x: f64,
        y: f64,
        text: String,
        anchor: LabelAnchor,
        font_size: f64,
    },
}

impl Primitive {
    /// Shift by `(dx, dy)` in the carcass frame.
    pub fn translated(&self, dx: f64, dy: f64) -> Primitive {
        match self {
            Primitive::Rect {
                x,
                y,
                width,
                height,
                stroke_weight,
            } => Primitive::Rect {
                x: x + dx,
                y: y + dy,
                width: *width,
                height: *height,
                stroke_weight: *stroke_weight,
            },
            Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                stroke_weight,
            } => Primitive::Line {
                x1: x1 + dx,
                y1: y1 + dy,
                x2: x2 + dx,
                y2: y2 + dy,
                stroke_weight: *stroke_weight,
            },
            Primitive::Polygon {
                points,
                stroke_weight,
            } => Primitive::Polygon {
                points: points.iter().map(|p| [p[0] + dx, p[1] + dy]).collect(),
                stroke_weight: *stroke_weight,
            },
            Primitive::Label {
                x,
                y,
                text,
                anchor,
                font_size,
            } => Primitive::Label {
                x: x + dx,
                y: y + dy,
                text: text.clone(),
                anchor: *anchor,
                font_size: *font_size,
            },
        }
    }

    /// Axis-aligned extent as `(min_x, min_y, max_x, max_y)`.
    ///
    /// Labels report their anchor point only; text metrics belong to the
    /// renderer.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        match self {
            Primitive::Rect {
                x, y, width, height, ..
            } => (*x, *y, x + width, y + height),
            Primitive::Line { x1, y1, x2, y2, .. } => {
                (x1.min(*x2), y1.min(*y2), x1.max(*x2), y1.max(*y2))
            }
            Primitive::Polygon { points, .. } => points.iter().fold(
                (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
                |(min_x, min_y, max_x, max_y), p| {
                    (
                        min_x.min(p[0]),
                        min_y.min(p[1]),
                        max_x.max(p[0]),
                        max_y.max(p[1]),
                    )
                },
            ),
            Primitive::Label { x, y, .. } => (*x, *y, *x, *y),
        }
    }
}

/// Where a label's anchor point sits relative to its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LabelAnchor {
    /// Text centered on the point.
    Center,
    /// Point at top-center, text flows downward.
    TopCenter,
    /// Point at bottom-center, text flows upward.
    BottomCenter,
}

/// A primitive with its semantic role attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePrimitive {
    pub role: Role,
    pub primitive: Primitive,
}

impl ScenePrimitive {
    pub fn new(role: Role, primitive: Primitive) -> Self {
        Self { role, primitive }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> ScenePrimitive {
        ScenePrimitive {
            role: self.role.clone(),
            primitive: self.primitive.translated(dx, dy),
        }
    }
}

/// Bounding viewport of a scene, millimetres, including label margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Viewport {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// The composed output of one render call.
///
/// Primitives are in paint order: carcass outline first, then dividers, then
/// bay internals, labels last so they draw on top. The scene owns its
/// primitives outright; it is built fresh per call and holds no references
/// back into the spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub primitives: Vec<ScenePrimitive>,
    pub viewport: Viewport,
    pub title: String,
}

impl Scene {
    /// Iterate primitives carrying a given role.
    pub fn with_role<'a>(&'a self, role: &'a Role) -> impl Iterator<Item = &'a Primitive> {
        self.primitives
            .iter()
            .filter(move |p| p.role == *role)
            .map(|p| &p.primitive)
    }
}
