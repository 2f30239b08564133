use layout_ops::LayoutError;

/// Errors from scene composition.
///
/// Every variant is a rejected configuration. The composers fail fast and
/// whole: a scene is either complete or absent, never partial.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ComposeError {
    #[error("wardrobe needs at least one bay")]
    NoBays,

    #[error("{name} must be positive, got 0")]
    ZeroDimension { name: &'static str },

    #[error("plinth height {plinth_mm} mm must be below the carcass height {height_mm} mm")]
    PlinthAboveCarcass { plinth_mm: u32, height_mm: u32 },

    #[error("bay {index} has zero width")]
    BayWidthZero { index: usize },

    #[error("bay widths sum to {actual} mm, expected {expected} mm")]
    WidthSumMismatch { expected: u32, actual: u64 },

    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}
