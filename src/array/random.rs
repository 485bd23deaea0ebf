use rand::{thread_rng, Rng};

use super::Array;

impl Array<i64> {
    /// Create an array of integers drawn uniformly from the half-open
    /// range `[low, high)`, using the process-global generator.
    pub fn randint(low: i64, high: i64, shape: Vec<usize>) -> Self {
        assert!(low < high, "low must be less than high");

        let total_size: usize = shape.iter().product();
        let mut rng = thread_rng();
        let data: Vec<i64> = (0..total_size).map(|_| rng.gen_range(low..high)).collect();
        Array::from_vec(data, shape)
    }
}

impl Array<f64> {
    /// Create an array of floats drawn uniformly from `[0.0, 1.0)`,
    /// using the process-global generator.
    pub fn random(shape: Vec<usize>) -> Self {
        let total_size: usize = shape.iter().product();
        let mut rng = thread_rng();
        let data: Vec<f64> = (0..total_size).map(|_| rng.gen::<f64>()).collect();
        Array::from_vec(data, shape)
    }
}
