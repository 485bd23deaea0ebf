use super::Array;
use std::ops::{Add, Div, Mul, Sub};

impl<'a> Add for &'a Array<f64> {
    type Output = Array<f64>;
    fn add(self, rhs: Self) -> Self::Output {
        assert_eq!(self.shape, rhs.shape, "Arrays must have the same shape");
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Array::from_vec(data, self.shape.clone())
    }
}

impl<'a> Sub for &'a Array<f64> {
    type Output = Array<f64>;
    fn sub(self, rhs: Self) -> Self::Output {
        assert_eq!(self.shape, rhs.shape, "Arrays must have the same shape");
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Array::from_vec(data, self.shape.clone())
    }
}

impl<'a> Mul for &'a Array<f64> {
    type Output = Array<f64>;
    fn mul(self, rhs: Self) -> Self::Output {
        assert_eq!(self.shape, rhs.shape, "Arrays must have the same shape");
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| a * b)
            .collect();
        Array::from_vec(data, self.shape.clone())
    }
}

impl<'a> Div for &'a Array<f64> {
    type Output = Array<f64>;
    fn div(self, rhs: Self) -> Self::Output {
        assert_eq!(self.shape, rhs.shape, "Arrays must have the same shape");
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| a / b)
            .collect();
        Array::from_vec(data, self.shape.clone())
    }
}

// Scalar variants, used by the demos
impl<'a> Add<f64> for &'a Array<f64> {
    type Output = Array<f64>;
    fn add(self, rhs: f64) -> Self::Output {
        let data: Vec<f64> = self.data.iter().map(|a| a + rhs).collect();
        Array::from_vec(data, self.shape.clone())
    }
}

impl<'a> Mul<f64> for &'a Array<f64> {
    type Output = Array<f64>;
    fn mul(self, rhs: f64) -> Self::Output {
        let data: Vec<f64> = self.data.iter().map(|a| a * rhs).collect();
        Array::from_vec(data, self.shape.clone())
    }
}
