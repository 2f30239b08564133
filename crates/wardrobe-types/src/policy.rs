use serde::{Deserialize, Serialize};

/// How much detail a scene carries.
///
/// Customer output is always a role-subset of Installer output for the same
/// spec: Installer adds labels, indices, and fitting hints, never replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DetailLevel {
    /// Minimal presentation view.
    Customer,
    /// Annotated view with dimensions and fitting hints.
    Installer,
}

/// Which projection to compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Projection {
    /// Straight-on 2D front view.
    Elevation,
    /// Flat affine-skew approximation of a 3D view.
    Isometric,
}

/// Rendering policy for one compose call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPolicy {
    pub detail: DetailLevel,
    pub projection: Projection,
}
