//! # RustNum
//!
//! A memory-safe take on NumPy-style n-dimensional arrays, written in Rust.
//!
//! RustNum provides:
//! - N-dimensional arrays backed by flat row-major storage
//! - Literal constructors from slices and nested rows
//! - Zero-, one-, and value-filled constructors for a given shape and dtype
//! - Uniform random integer and float constructors
//! - Shape, dimensionality, size, and element-type inspection
//! - NumPy-style text rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use rustnum::Array;
//!
//! // Create a 1D array from a literal list
//! let d1 = Array::from_slice(&[1i64, 2, 3, 4, 5]);
//! assert_eq!(d1.shape, vec![5]);
//! assert_eq!(d1.ndim(), 1);
//! assert_eq!(d1.size(), 5);
//! assert_eq!(d1.dtype().to_string(), "int64");
//!
//! // Create a 2D array from nested rows
//! let d2 = Array::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]);
//! assert_eq!(d2.shape, vec![2, 3]);
//!
//! // Filled constructors
//! let zero = Array::<i64>::zeros(vec![2, 3]);
//! let one = Array::<i64>::ones(vec![3, 2]);
//! assert!(zero.data.iter().all(|&x| x == 0));
//! assert!(one.data.iter().all(|&x| x == 1));
//!
//! // Random constructors
//! let ints = Array::<i64>::randint(0, 10, vec![2, 2]);
//! let floats = Array::<f64>::random(vec![2, 3]);
//! assert!(ints.data.iter().all(|&x| (0..10).contains(&x)));
//! assert!(floats.data.iter().all(|&x| (0.0..1.0).contains(&x)));
//!
//! // Text rendering
//! println!("{}", d1);
//! println!("{}", d2);
//! ```

pub mod array;

// Re-export main types for convenience
pub use array::{Array, DType, Element};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_n_dimensional() {
        // N-dimensional array creation and indexing
        let arr = Array::from_vec((0..24).map(|x| x as f64).collect(), vec![2, 3, 4]);
        assert_eq!(arr.shape, vec![2, 3, 4]);
        assert_eq!(arr.ndim(), 3);
        assert_eq!(arr[&[0, 0, 0][..]], 0.0);
        assert_eq!(arr[&[1, 2, 3][..]], 23.0);

        // Reshape
        let reshaped = arr.reshape(vec![6, 4]);
        assert_eq!(reshaped.shape, vec![6, 4]);
        assert_eq!(reshaped.data.len(), 24);
    }

    #[test]
    fn test_array_from_slice_attributes() {
        let d1 = Array::from_slice(&[1i64, 2, 3, 4, 5]);
        assert_eq!(d1.shape, vec![5]);
        assert_eq!(d1.ndim(), 1);
        assert_eq!(d1.size(), 5);
        assert_eq!(d1.len(), 5);
        assert_eq!(d1.dtype(), DType::Int64);
        assert_eq!(d1.data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_array_from_rows_attributes() {
        let d2 = Array::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]);
        assert_eq!(d2.shape, vec![2, 3]);
        assert_eq!(d2.ndim(), 2);
        assert_eq!(d2.size(), 6);
        assert_eq!(d2[(0, 0)], 1);
        assert_eq!(d2[(1, 2)], 6);
    }

    #[test]
    #[should_panic(expected = "All rows must have the same length")]
    fn test_array_from_ragged_rows_panics() {
        Array::from_rows(vec![vec![1i64, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_zeros_and_ones() {
        let zero = Array::<i64>::zeros(vec![2, 3]);
        assert_eq!(zero.shape, vec![2, 3]);
        assert_eq!(zero.dtype(), DType::Int64);
        assert!(zero.data.iter().all(|&x| x == 0));

        let one = Array::<i64>::ones(vec![3, 2]);
        assert_eq!(one.shape, vec![3, 2]);
        assert_eq!(one.dtype(), DType::Int64);
        assert!(one.data.iter().all(|&x| x == 1));
    }

    #[test]
    fn test_full_and_arange() {
        let sevens = Array::full(vec![2, 2], 7i64);
        assert_eq!(sevens.data, vec![7, 7, 7, 7]);

        let range = Array::arange(0i64, 10, 2);
        assert_eq!(range.shape, vec![5]);
        assert_eq!(range.data, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_random_constructors() {
        let ints = Array::<i64>::randint(0, 10, vec![2, 2]);
        assert_eq!(ints.shape, vec![2, 2]);
        assert_eq!(ints.size(), 4);
        assert!(ints.data.iter().all(|&x| (0..10).contains(&x)));

        let floats = Array::<f64>::random(vec![2, 3]);
        assert_eq!(floats.shape, vec![2, 3]);
        assert_eq!(floats.size(), 6);
        assert!(floats.data.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_literal_construction_idempotent() {
        let a = Array::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]);
        let b = Array::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]);
        assert_eq!(a, b);
        assert_eq!(a.shape, b.shape);
        assert_eq!(a.dtype(), b.dtype());
    }

    #[test]
    fn test_array_elementwise_ops() {
        let arr1 = Array::from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        let arr2 = Array::from_vec(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2]);

        let sum = &arr1 + &arr2;
        assert_eq!(sum.data, vec![6.0, 8.0, 10.0, 12.0]);

        let diff = &arr2 - &arr1;
        assert_eq!(diff.data, vec![4.0, 4.0, 4.0, 4.0]);

        let prod = &arr1 * &arr2;
        assert_eq!(prod.data, vec![5.0, 12.0, 21.0, 32.0]);

        let quot = &arr2 / &arr1;
        assert_eq!(quot.data, vec![5.0, 3.0, 7.0 / 3.0, 2.0]);

        // Scalar operations
        let scaled = &arr1 + 5.0;
        assert_eq!(scaled.data, vec![6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_transpose() {
        let arr = Array::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]);
        let t = arr.transpose();
        assert_eq!(t.shape, vec![3, 2]);
        assert_eq!(t.data, vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let arr = Array::from_rows(vec![vec![1i64, 2], vec![3, 4]]);
        assert_eq!(arr.get(&[1, 1]), Some(&4));
        assert_eq!(arr.get(&[2, 0]), None);
        assert_eq!(arr.get(&[0, 2]), None);
    }
}
