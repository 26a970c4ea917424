pub mod model;

pub use model::{ModuleDescriptor, ModuleFilter, PathElement};
