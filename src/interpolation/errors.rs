use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("x-values must be strictly increasing: x[{idx}] = {curr} does not exceed its predecessor {prev}")]
    NonIncreasingX { idx: usize, prev: f64, curr: f64 },

    #[error("evaluation point {got} out of bounds in [{x_min}, {x_max}]")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },
}
