use crate::types::LayoutError;

/// Clamp `value` into `[floor, ceiling]`, failing when the window is empty.
///
/// A floor that reaches its ceiling means the enclosing configuration cannot
/// hold the part at all; the builders report that instead of emitting a
/// crossed or zero-length primitive.
pub fn clamp_mm(value: f64, floor: f64, ceiling: f64) -> Result<f64, LayoutError> {
    if floor >= ceiling {
        return Err(LayoutError::ClampBoundsInverted { floor, ceiling });
    }
    Ok(value.clamp(floor, ceiling))
}
