//! Layout defaults, collected in one place.
//!
//! Earlier drafts of this tool disagreed on several of these values (rail
//! factor 0.62 vs 0.72, differing clamp margins). This module is the single
//! authoritative set; nothing else hard-codes a layout number.

/// Default hanging-rail height as a fraction of carcass height.
pub const SINGLE_RAIL_HEIGHT_FACTOR: f64 = 0.62;
/// Minimum rail clearance above the plinth.
pub const SINGLE_RAIL_FLOOR_MARGIN: f64 = 200.0;
/// Minimum rail clearance below the carcass top.
pub const SINGLE_RAIL_CEIL_MARGIN: f64 = 100.0;
/// Installer shelf hint height as a fraction of carcass height.
pub const SHELF_HEIGHT_FACTOR: f64 = 0.85;

/// Default mid-divider height as a fraction of carcass height.
pub const DOUBLE_MID_HEIGHT_FACTOR: f64 = 0.50;
/// Minimum mid-divider clearance above the plinth.
pub const DOUBLE_MID_FLOOR_MARGIN: f64 = 300.0;
/// Minimum mid-divider clearance below the carcass top.
pub const DOUBLE_MID_CEIL_MARGIN: f64 = 300.0;
/// Preferred top-rail offset above the mid divider.
pub const DOUBLE_TOP_RAIL_OFFSET: f64 = 550.0;
/// Minimum top-rail offset above the mid divider.
pub const DOUBLE_TOP_RAIL_FLOOR_OFFSET: f64 = 300.0;
/// Minimum top-rail clearance below the carcass top.
pub const DOUBLE_TOP_RAIL_CEIL_MARGIN: f64 = 100.0;
/// Preferred bottom-rail offset above the plinth.
pub const DOUBLE_BOTTOM_RAIL_OFFSET: f64 = 550.0;
/// Minimum bottom-rail offset above the plinth.
pub const DOUBLE_BOTTOM_RAIL_FLOOR_OFFSET: f64 = 250.0;
/// Minimum bottom-rail clearance below the mid divider.
pub const DOUBLE_BOTTOM_RAIL_CEIL_MARGIN: f64 = 100.0;

/// Drawer tower width as a fraction of bay width, centered.
pub const TOWER_WIDTH_FACTOR: f64 = 0.76;
/// Minimum usable tower height.
pub const TOWER_MIN_HEIGHT: f64 = 400.0;
/// Minimum tower clearance below the carcass top.
pub const TOWER_CEIL_MARGIN: f64 = 100.0;
/// Clearance above the tower required before a rail hint is drawn.
pub const TOWER_RAIL_CLEARANCE: f64 = 150.0;
/// Rail hint offset above the tower top.
pub const TOWER_RAIL_LIFT: f64 = 100.0;

/// Rail span as a fraction of bay width, centered.
pub const RAIL_SPAN_FACTOR: f64 = 0.85;

/// Stroke weight for rails, dividers, and tower outlines.
pub const INTERNAL_STROKE: f64 = 2.0;
/// Stroke weight for drawer split lines.
pub const DRAWER_SPLIT_STROKE: f64 = 1.5;
/// Stroke weight for installer-only hints.
pub const HINT_STROKE: f64 = 1.0;
