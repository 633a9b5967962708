//! Finite-difference Greeks
//!
//! Every sensitivity is a difference quotient of closed-form prices, so the
//! estimator shares the pricer's domain and step sizes are fixed constants.

use tracing::debug;

use crate::error::DomainError;
use crate::pricer::price;
use crate::types::{GreeksResult, MarketParameters, OptionType, PriceResult};
use crate::BsmResult;

/// Spot bump as a fraction of spot (1%)
pub const SPOT_BUMP_FRACTION: f64 = 0.01;
/// Maturity bump in years (one calendar day)
pub const MATURITY_BUMP: f64 = 1.0 / 365.0;
/// Absolute volatility bump (one vol point)
pub const VOLATILITY_BUMP: f64 = 0.01;
/// Absolute rate bump (one basis point)
pub const RATE_BUMP: f64 = 0.0001;

/// Base price plus the five bumped re-pricings the estimator needs.
struct Repricings {
    base: PriceResult,
    spot_up: PriceResult,
    spot_down: PriceResult,
    day_later: PriceResult,
    vol_up: PriceResult,
    rate_up: PriceResult,
}

/// `value + step`, refusing a result that has left the f64 range.
fn bump(field: &'static str, value: f64, step: f64) -> BsmResult<f64> {
    let bumped = value + step;
    if bumped.is_finite() {
        Ok(bumped)
    } else {
        Err(DomainError::BumpOverflow { field, value })
    }
}

impl Repricings {
    fn compute(params: &MarketParameters, ds: f64) -> BsmResult<Self> {
        let base = price(params)?;

        let s = params.spot_price;
        let spot_up = bump("spot_price", s, ds)?;
        let vol_up = bump("volatility", params.volatility, VOLATILITY_BUMP)?;
        let rate_up = bump("risk_free_rate", params.risk_free_rate, RATE_BUMP)?;

        Ok(Self {
            base,
            spot_up: price(&params.with_spot(spot_up))?,
            spot_down: price(&params.with_spot(s - ds))?,
            day_later: price(&params.with_maturity(params.time_to_maturity - MATURITY_BUMP))?,
            vol_up: price(&params.with_volatility(vol_up))?,
            rate_up: price(&params.with_rate(rate_up))?,
        })
    }

    /// (delta, gamma, theta, vega, rho) for one side of the pair
    fn side(&self, option_type: OptionType, ds: f64) -> (f64, f64, f64, f64, f64) {
        let v = |p: &PriceResult| p.value(option_type);
        let base = v(&self.base);
        let up = v(&self.spot_up);

        let delta = (up - base) / ds;
        // ds * ds underflows for tiny spots; divide twice instead
        let gamma = (up - 2.0 * base + v(&self.spot_down)) / ds / ds;
        let theta = (v(&self.day_later) - base) / MATURITY_BUMP;
        let vega = (v(&self.vol_up) - base) / VOLATILITY_BUMP;
        let rho = (v(&self.rate_up) - base) / RATE_BUMP;
        (delta, gamma, theta, vega, rho)
    }
}

/// Delta, Gamma, Theta, Vega and Rho for call and put by bump-and-reprice.
///
/// Theta bumps maturity down by one day, so an option with
/// `time_to_maturity <= 1/365` yields a `DomainError` rather than a clamped
/// estimate. A spot close to `f64::MAX` whose 1% bump overflows yields
/// `DomainError::BumpOverflow` naming the caller's value.
pub fn estimate_greeks(params: &MarketParameters) -> BsmResult<GreeksResult> {
    let ds = SPOT_BUMP_FRACTION * params.spot_price;
    let repricings = Repricings::compute(params, ds)?;

    let (call_delta, call_gamma, call_theta, call_vega, call_rho) =
        repricings.side(OptionType::Call, ds);
    let (put_delta, put_gamma, put_theta, put_vega, put_rho) =
        repricings.side(OptionType::Put, ds);

    debug!(call_delta, call_gamma, put_delta, put_gamma, "estimated greeks");

    Ok(GreeksResult {
        call_delta,
        call_gamma,
        call_theta,
        call_vega,
        call_rho,
        put_delta,
        put_gamma,
        put_theta,
        put_vega,
        put_rho,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn default_params() -> MarketParameters {
        MarketParameters::new(100.0, 100.0, 1.0, 0.20, 0.05)
    }

    #[test]
    fn test_atm_delta_and_vega() {
        let g = estimate_greeks(&default_params()).unwrap();
        // Analytic: call delta 0.6368, put delta -0.3632, vega 37.52.
        // Forward differences add roughly half a step of curvature.
        assert!(approx_eq(g.call_delta, 0.64, 0.02), "call delta {}", g.call_delta);
        assert!(approx_eq(g.put_delta, -0.36, 0.02), "put delta {}", g.put_delta);
        assert!(approx_eq(g.call_vega, 37.5, 0.5), "call vega {}", g.call_vega);
    }

    #[test]
    fn test_call_minus_put_delta_is_one() {
        // d(C - P)/dS = 1 exactly, and the difference quotient of a linear
        // function is exact up to rounding.
        let g = estimate_greeks(&default_params()).unwrap();
        assert!(approx_eq(g.call_delta - g.put_delta, 1.0, 1e-9));
    }

    #[test]
    fn test_gamma_equal_for_call_and_put() {
        let g = estimate_greeks(&default_params()).unwrap();
        let rel = (g.call_gamma - g.put_gamma).abs() / g.call_gamma.abs();
        assert!(rel < 1e-4, "call gamma {} put gamma {}", g.call_gamma, g.put_gamma);
        // Analytic ATM gamma N'(d1)/(S sigma sqrt T) = 0.018762
        assert!(approx_eq(g.call_gamma, 0.01876, 0.0005));
    }

    #[test]
    fn test_theta_sign_and_rho() {
        let g = estimate_greeks(&default_params()).unwrap();
        // Analytic per-year theta: call -6.414, put -1.658
        assert!(approx_eq(g.call_theta, -6.41, 0.1), "call theta {}", g.call_theta);
        assert!(approx_eq(g.put_theta, -1.66, 0.1), "put theta {}", g.put_theta);
        // Analytic rho: call 53.23, put -41.89
        assert!(approx_eq(g.call_rho, 53.23, 0.1), "call rho {}", g.call_rho);
        assert!(approx_eq(g.put_rho, -41.89, 0.1), "put rho {}", g.put_rho);
    }

    #[test]
    fn test_theta_fails_one_day_before_expiry() {
        let params = default_params().with_maturity(1.0 / 365.0);
        assert_eq!(
            estimate_greeks(&params),
            Err(DomainError::ZeroOrNegativeMaturity(0.0))
        );
    }

    #[test]
    fn test_gamma_finite_for_tiny_spot() {
        // Prices are homogeneous of degree one in (S, X), so gamma scales by 1/lambda
        let reference = estimate_greeks(&default_params()).unwrap();
        let tiny = default_params().with_spot(1e-200).with_strike(1e-200);
        let g = estimate_greeks(&tiny).unwrap();
        assert!(g.call_gamma.is_finite() && g.put_gamma.is_finite());
        let expected = reference.call_gamma * 1e202;
        let rel = (g.call_gamma - expected).abs() / expected;
        assert!(rel < 1e-6, "tiny-spot gamma {} vs {}", g.call_gamma, expected);
    }

    #[test]
    fn test_spot_bump_overflow_names_input() {
        let params = default_params().with_spot(1.79e308);
        assert_eq!(
            estimate_greeks(&params),
            Err(DomainError::BumpOverflow {
                field: "spot_price",
                value: 1.79e308
            })
        );
    }

    #[test]
    fn test_base_domain_error_forwarded() {
        let params = default_params().with_volatility(0.0);
        assert_eq!(
            estimate_greeks(&params),
            Err(DomainError::ZeroOrNegativeVolatility(0.0))
        );
    }
}
