use rustnum::array::Array;

fn main() {
    let a = Array::from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let b = Array::<f64>::ones(vec![2, 2]);
    let c = &a + &b;

    println!("Array a:\n{}", a);
    println!("Array b:\n{}", b);
    println!("a + b =\n{}", c);

    let scaled = &a * 2.0;
    println!("a * 2 =\n{}", scaled);

    let shifted = &a + 5.0;
    println!("a + 5 =\n{}", shifted);
}
