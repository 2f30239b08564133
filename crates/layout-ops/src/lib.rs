pub mod allocate;
pub mod clamp;
pub mod constants;
pub mod double;
pub mod drawer_tower;
pub mod single;
pub mod types;

pub use allocate::allocate;
pub use clamp::clamp_mm;
pub use double::{build_double, bottom_rail_height, mid_divider_height, top_rail_height};
pub use drawer_tower::build_drawer_tower;
pub use single::build_single;
pub use types::{centered_span, LayoutError};
