/// Errors from layout operations.
///
/// Every variant is a rejected configuration, reported synchronously to the
/// caller. There is no transient failure class: the operations do no I/O and
/// are never retried.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LayoutError {
    #[error("bay count must be at least 1")]
    BayCountZero,

    #[error("total width {total_mm} mm cannot give {count} bays at least 1 mm each")]
    TotalBelowBayCount { total_mm: u32, count: usize },

    #[error("expected {expected} bay weights, got {got}")]
    WeightCountMismatch { expected: usize, got: usize },

    #[error("clamp window is empty: floor {floor} mm is not below ceiling {ceiling} mm")]
    ClampBoundsInverted { floor: f64, ceiling: f64 },

    #[error("drawer count must be at least 1")]
    DrawerCountZero,
}

/// Horizontal span of `factor` x `width_mm`, centered in the bay.
/// Returns `(x1, x2)` in bay-local coordinates.
pub fn centered_span(width_mm: f64, factor: f64) -> (f64, f64) {
    let half = width_mm * factor / 2.0;
    let center = width_mm / 2.0;
    (center - half, center + half)
}
