use crate::types::LayoutError;

/// Split `total_mm` across `count` bays.
///
/// With no weights (or a non-positive weight sum) the split is equal: the
/// leftover millimetres of an uneven division go to the leftmost bays, one
/// each. With weights the split is proportional: each share is floored, then
/// the rounding deficit is settled one millimetre at a time in bay order.
///
/// Postconditions: the widths sum to `total_mm` exactly and every width is at
/// least 1 mm.
pub fn allocate(
    total_mm: u32,
    count: usize,
    weights: Option<&[f64]>,
) -> Result<Vec<u32>, LayoutError> {
    if count == 0 {
        return Err(LayoutError::BayCountZero);
    }
    if (total_mm as usize) < count {
        return Err(LayoutError::TotalBelowBayCount { total_mm, count });
    }

    if let Some(w) = weights {
        if w.len() != count {
            return Err(LayoutError::WeightCountMismatch {
                expected: count,
                got: w.len(),
            });
        }
        let sum: f64 = w.iter().sum();
        if sum > 0.0 {
            return Ok(allocate_weighted(total_mm, w, sum));
        }
    }

    Ok(allocate_equal(total_mm, count))
}

fn allocate_equal(total_mm: u32, count: usize) -> Vec<u32> {
    let base = total_mm / count as u32;
    let remainder = (total_mm % count as u32) as usize;
    (0..count)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

fn allocate_weighted(total_mm: u32, weights: &[f64], weight_sum: f64) -> Vec<u32> {
    // Floor each scaled share, holding a 1 mm minimum per bay. A weight so
    // small its share floors to zero still gets a visible bay.
    let mut widths: Vec<u32> = weights
        .iter()
        .map(|w| {
            let scaled = (w.max(0.0) / weight_sum * total_mm as f64).floor() as u32;
            scaled.max(1)
        })
        .collect();

    let n = widths.len();
    let total = i64::from(total_mm);
    let mut sum: i64 = widths.iter().map(|&v| i64::from(v)).sum();

    // Settle the rounding deficit one millimetre at a time, in bay order.
    let mut i = 0;
    while sum < total {
        widths[i % n] += 1;
        sum += 1;
        i += 1;
    }

    // The 1 mm lift can overshoot when a weight is vanishingly small next to
    // a huge one. Take the excess back from bays that can spare it.
    // Terminates: total >= count, so while sum > total some bay holds > 1 mm.
    let mut i = 0;
    while sum > total {
        let idx = i % n;
        if widths[idx] > 1 {
            widths[idx] -= 1;
            sum -= 1;
        }
        i += 1;
    }

    widths
}
