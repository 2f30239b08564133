use serde::{Deserialize, Serialize};

/// Semantic role of an emitted primitive.
///
/// Roles identify what a primitive depicts independent of its coordinates, so
/// detail levels can be compared part-for-part and a renderer can style by
/// part (heavier carcass strokes, dashed hints) without inspecting geometry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Role {
    /// The outer structural box.
    CarcassOutline,
    /// The base riser strip.
    Plinth,
    /// Vertical divider at the left edge of bay `index` (1-based).
    BayDivider { index: usize },
    /// The hanging rail of a single-rail bay.
    HangRail,
    /// Installer-only shelf hint near the top of a single-rail bay.
    ShelfHint,
    /// Horizontal mid divider of a double-rail bay.
    MidDivider,
    /// Upper rail of a double-rail bay.
    TopRail,
    /// Lower rail of a double-rail bay.
    BottomRail,
    /// Outline of a drawer tower.
    TowerOutline,
    /// Split line between drawer fronts `index` and `index + 1` (1-based).
    DrawerSplit { index: usize },
    /// Installer-only rail hint above a drawer tower.
    TowerRail,
    /// Installer-only width annotation under bay `bay` (1-based).
    WidthLabel { bay: usize },
    /// Installer-only plinth annotation.
    PlinthLabel,
    /// Skewed top face of the isometric projection.
    TopFace,
    /// Skewed side face of the isometric projection.
    SideFace,
    /// Bay divider echoed onto the isometric top face.
    DepthCue { index: usize },
}
