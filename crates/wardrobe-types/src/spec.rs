use serde::{Deserialize, Serialize};

/// Full parametric description of one wardrobe. Immutable per render.
///
/// All dimensions are integer millimetres. The input layer is responsible for
/// keeping values inside catalogue ranges; the engine re-validates only shape
/// invariants (non-empty bays, exact width sum, positive dimensions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeSpec {
    /// Overall carcass width.
    pub total_width_mm: u32,
    /// Overall carcass height, plinth included.
    pub total_height_mm: u32,
    /// Carcass depth, used only by the isometric projection.
    pub depth_mm: u32,
    /// Height of the base riser strip. 0 means no plinth.
    #[serde(default)]
    pub plinth_height_mm: u32,
    /// Left-to-right bay sequence. Widths must sum to `total_width_mm` exactly.
    pub bays: Vec<BaySpec>,
}

/// One vertical compartment of the wardrobe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaySpec {
    /// Allocated width of this bay. Always at least 1 mm.
    pub width_mm: u32,
    /// Internal fit-out of this bay.
    pub layout: LayoutParams,
}

/// Internal layout of a bay, with its type-specific parameters.
///
/// Numeric overrides are requests, not guarantees: the builders clamp them
/// into the valid sub-range of the carcass before emitting geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayoutParams {
    /// One hanging rail across the bay.
    Single {
        /// Rail height override. Defaults to a fraction of carcass height.
        rail_height_mm: Option<u32>,
    },
    /// Two hanging rails separated by a horizontal mid divider.
    Double {
        /// Mid-divider height override. Defaults to half the carcass height.
        mid_divider_height_mm: Option<u32>,
    },
    /// A bottom-aligned bank of drawers.
    DrawerTower {
        /// Number of drawer fronts. Must be at least 1.
        drawer_count: u32,
        /// Requested tower height, clamped into the carcass.
        tower_height_mm: u32,
    },
}

impl LayoutParams {
    pub fn kind(&self) -> LayoutKind {
        match self {
            LayoutParams::Single { .. } => LayoutKind::Single,
            LayoutParams::Double { .. } => LayoutKind::Double,
            LayoutParams::DrawerTower { .. } => LayoutKind::DrawerTower,
        }
    }
}

/// Layout discriminant, used by summaries and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayoutKind {
    Single,
    Double,
    DrawerTower,
}

impl std::fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LayoutKind::Single => "single rail",
            LayoutKind::Double => "double rail",
            LayoutKind::DrawerTower => "drawer tower",
        };
        write!(f, "{}", name)
    }
}

/// Per-bay summary row, a pure projection of the spec.
///
/// The presentation layer turns these into text ("Bay 2: 600 mm, drawer
/// tower"); the engine only supplies the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaySummary {
    /// 1-based bay position, left to right.
    pub index: usize,
    pub width_mm: u32,
    pub kind: LayoutKind,
}
