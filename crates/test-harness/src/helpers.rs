//! Helper functions: error type, spec builders, fixture parsing.

use scene_engine::plan_bays;
use wardrobe_types::{LayoutParams, WardrobeSpec};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("spec construction failed: {reason}")]
    SpecConstruction { reason: String },

    #[error("fixture parse failed: {0}")]
    Fixture(#[from] serde_json::Error),
}

// ── Spec Builders ───────────────────────────────────────────────────────────

/// Build an equal-split spec with the given layouts.
pub fn equal_spec(
    total_width_mm: u32,
    total_height_mm: u32,
    depth_mm: u32,
    plinth_height_mm: u32,
    layouts: Vec<LayoutParams>,
) -> Result<WardrobeSpec, HarnessError> {
    let bays =
        plan_bays(total_width_mm, layouts, None).map_err(|e| HarnessError::SpecConstruction {
            reason: e.to_string(),
        })?;
    Ok(WardrobeSpec {
        total_width_mm,
        total_height_mm,
        depth_mm,
        plinth_height_mm,
        bays,
    })
}

/// `count` single-rail bays with defaulted rail heights.
pub fn single_rail_layouts(count: usize) -> Vec<LayoutParams> {
    vec![
        LayoutParams::Single {
            rail_height_mm: None,
        };
        count
    ]
}

/// One of each layout kind: single, double, drawer tower.
pub fn mixed_layouts() -> Vec<LayoutParams> {
    vec![
        LayoutParams::Single {
            rail_height_mm: None,
        },
        LayoutParams::Double {
            mid_divider_height_mm: None,
        },
        LayoutParams::DrawerTower {
            drawer_count: 4,
            tower_height_mm: 1200,
        },
    ]
}

/// Parse a spec the way the input layer hands one over.
pub fn spec_from_json(json: &str) -> Result<WardrobeSpec, HarnessError> {
    Ok(serde_json::from_str(json)?)
}
