use wardrobe_types::WardrobeSpec;

use crate::types::ComposeError;

/// Defensive re-validation of a spec's shape invariants.
///
/// The input layer owns catalogue ranges (minimum widths, height steps); the
/// engine only refuses specs it cannot draw correctly: empty or zero-width
/// bays, widths that do not add up, dimensions of zero.
pub fn validate(spec: &WardrobeSpec) -> Result<(), ComposeError> {
    if spec.bays.is_empty() {
        return Err(ComposeError::NoBays);
    }
    if spec.total_width_mm == 0 {
        return Err(ComposeError::ZeroDimension {
            name: "total width",
        });
    }
    if spec.total_height_mm == 0 {
        return Err(ComposeError::ZeroDimension {
            name: "total height",
        });
    }
    if spec.depth_mm == 0 {
        return Err(ComposeError::ZeroDimension { name: "depth" });
    }
    if spec.plinth_height_mm >= spec.total_height_mm {
        return Err(ComposeError::PlinthAboveCarcass {
            plinth_mm: spec.plinth_height_mm,
            height_mm: spec.total_height_mm,
        });
    }

    for (i, bay) in spec.bays.iter().enumerate() {
        if bay.width_mm == 0 {
            return Err(ComposeError::BayWidthZero { index: i });
        }
    }
    // Sum in u64: a hostile spec must produce a mismatch, not an overflow.
    let sum: u64 = spec.bays.iter().map(|b| u64::from(b.width_mm)).sum();
    if sum != u64::from(spec.total_width_mm) {
        return Err(ComposeError::WidthSumMismatch {
            expected: spec.total_width_mm,
            actual: sum,
        });
    }

    Ok(())
}
