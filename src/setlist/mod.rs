pub mod allocator;
pub mod filters;
pub mod generator;
pub mod ordering;
pub mod sampler;
pub mod trimmer;
pub mod utils;

pub use generator::*;
