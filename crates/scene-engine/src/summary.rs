use wardrobe_types::{BaySummary, WardrobeSpec};

/// Per-bay summary rows, a pure projection of the spec.
///
/// The presentation layer owns the wording; this only supplies index, width,
/// and layout kind per bay, left to right.
pub fn bay_summaries(spec: &WardrobeSpec) -> Vec<BaySummary> {
    spec.bays
        .iter()
        .enumerate()
        .map(|(i, bay)| BaySummary {
            index: i + 1,
            width_mm: bay.width_mm,
            kind: bay.layout.kind(),
        })
        .collect()
}
