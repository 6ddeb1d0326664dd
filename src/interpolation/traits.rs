use crate::interpolation::errors::InterpolationError;

pub trait Interpolator {
    /// evaluates a single query point
    /// defined separately by each interpolant
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// evaluates many points, stopping at the first failure
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
