pub mod importance;

pub use importance::Importance;
