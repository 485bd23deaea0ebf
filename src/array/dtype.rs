use std::fmt;

use num_traits::{One, Zero};

/// The fixed numeric kind shared by every element of an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Int32,
    Int64,
    Float32,
    Float64,
}

impl DType {
    /// NumPy-compatible type name
    pub fn name(&self) -> &'static str {
        match self {
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar types that can be stored in an [`Array`](super::Array).
///
/// Ties each supported Rust scalar to its [`DType`] tag and to the additive
/// and multiplicative identities used by `zeros` and `ones`.
pub trait Element: Clone + Zero + One {
    const DTYPE: DType;
}

impl Element for i32 {
    const DTYPE: DType = DType::Int32;
}

impl Element for i64 {
    const DTYPE: DType = DType::Int64;
}

impl Element for f32 {
    const DTYPE: DType = DType::Float32;
}

impl Element for f64 {
    const DTYPE: DType = DType::Float64;
}
