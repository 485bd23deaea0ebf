pub mod core;
pub mod display;
pub mod dtype;
pub mod ops;
pub mod random;

pub use self::core::Array;
pub use self::dtype::{DType, Element};
