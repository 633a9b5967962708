use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// Standard normal CDF via the complementary error function.
///
/// Phi(x) = erfc(-x / sqrt(2)) / 2. Evaluating through erfc keeps full
/// relative precision in the lower tail where `1 - Phi(-x)` would cancel.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}
