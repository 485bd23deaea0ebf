//! Array creation and attribute inspection walkthrough.
//!
//! Builds arrays from literals, queries their attributes, then shows the
//! filled and random constructors, printing each result.

use rustnum::Array;

fn main() {
    let d1 = Array::from_slice(&[1i64, 2, 3, 4, 5]);

    let d2 = Array::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]);

    println!("{}", d1);
    println!("{}", d2);

    println!();
    println!("{:?}", d1.shape);
    println!("{}", d1.ndim());
    println!("{}", d1.size());
    println!("{}", d1.dtype());

    println!();
    let zero = Array::<i64>::zeros(vec![2, 3]);
    println!("{}", zero);

    println!();
    let one = Array::<i64>::ones(vec![3, 2]);
    println!("{}", one);

    println!();
    let random = Array::<i64>::randint(0, 10, vec![2, 2]);
    println!("{}", random);

    println!();
    let random = Array::<f64>::random(vec![2, 3]);
    println!("{}", random);
}
