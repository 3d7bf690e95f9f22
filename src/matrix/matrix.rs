use num_traits::{Float, NumCast, ToPrimitive};

pub const TOLERANCE: f64 = 1e-12;

pub trait Cell:  // Avoid repeating all the traits
    Float
    + std::fmt::Display
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    fn from_f64_lossy(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::zero)
    }

    fn to_f64_lossy(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

impl<T> Cell for T where
    T: Float + std::fmt::Display + std::fmt::Debug + Send + Sync + 'static
{
}

pub trait Matrix<T>
where
    Self: Sized,
{
    fn new(rows: usize, cols: usize) -> Self;
    fn filled(rows: usize, cols: usize, value: T) -> Self;
    fn from_list(lines: Vec<Vec<T>>) -> Self;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn at(&self, row: usize, col: usize) -> T;
    fn row(&self, row: usize) -> &[T];

    fn swap_rows(&mut self, i: usize, j: usize);
    fn scale_row(&mut self, i: usize, factor: T);
    fn divide_row(&mut self, i: usize, divisor: T);
    fn add_scaled_row(&mut self, target: usize, source: usize, factor: T);

    fn is_rref(&self, tolerance: T) -> bool;
}
