pub mod policy;
pub mod roles;
pub mod scene;
pub mod spec;

pub use policy::*;
pub use roles::*;
pub use scene::*;
pub use spec::*;
