use layout_ops::allocate;
use wardrobe_types::{BaySpec, LayoutParams};

use crate::types::ComposeError;

/// Build a width-assigned bay list from per-bay layout choices.
///
/// This is the allocation step of the pipeline: the input layer collects one
/// layout per bay (and optional weights for a custom split) and gets back
/// bays whose widths sum to `total_width_mm` exactly. Weights follow the
/// allocator contract: absent means equal split.
pub fn plan_bays(
    total_width_mm: u32,
    layouts: Vec<LayoutParams>,
    weights: Option<&[f64]>,
) -> Result<Vec<BaySpec>, ComposeError> {
    let widths = allocate(total_width_mm, layouts.len(), weights)?;
    Ok(layouts
        .into_iter()
        .zip(widths)
        .map(|(layout, width_mm)| BaySpec { width_mm, layout })
        .collect())
}
