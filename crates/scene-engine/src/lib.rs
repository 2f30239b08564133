pub mod bays;
pub mod constants;
pub mod elevation;
pub mod isometric;
pub mod plan;
pub mod summary;
pub mod types;
pub mod validate;

pub use elevation::compose_elevation;
pub use isometric::compose_isometric;
pub use plan::plan_bays;
pub use summary::bay_summaries;
pub use types::ComposeError;

use wardrobe_types::{Projection, RenderPolicy, Scene, WardrobeSpec};

/// Compose a scene for the given spec and policy.
///
/// Pure and synchronous: identical inputs always yield structurally identical
/// scenes, so callers may cache on `(spec, policy)` freely. The spec is
/// re-validated defensively before any geometry is emitted.
pub fn compose(spec: &WardrobeSpec, policy: &RenderPolicy) -> Result<Scene, ComposeError> {
    match policy.projection {
        Projection::Elevation => elevation::compose_elevation(spec, policy.detail),
        Projection::Isometric => isometric::compose_isometric(spec, policy.detail),
    }
}
