use tracing::trace;

use crate::error::DomainError;
use crate::math::norm_cdf;
use crate::types::{MarketParameters, PriceResult};
use crate::BsmResult;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check the formula's domain: every field finite, `S`, `X`, `T` and `sigma`
/// strictly positive. The rate may be any finite value, negative included.
pub fn validate(params: &MarketParameters) -> BsmResult<()> {
    let fields = [
        ("spot_price", params.spot_price),
        ("strike_price", params.strike_price),
        ("time_to_maturity", params.time_to_maturity),
        ("volatility", params.volatility),
        ("risk_free_rate", params.risk_free_rate),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(DomainError::NonFinite { field, value });
        }
    }

    if params.spot_price <= 0.0 {
        return Err(DomainError::NonPositiveSpot(params.spot_price));
    }
    if params.strike_price <= 0.0 {
        return Err(DomainError::NonPositiveStrike(params.strike_price));
    }
    if params.time_to_maturity <= 0.0 {
        return Err(DomainError::ZeroOrNegativeMaturity(params.time_to_maturity));
    }
    if params.volatility <= 0.0 {
        return Err(DomainError::ZeroOrNegativeVolatility(params.volatility));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public API: price
// ---------------------------------------------------------------------------

/// European call and put under Black-Scholes-Merton (no dividends).
///
/// ```text
/// d1 = (ln(S/X) + (r + sigma^2/2) T) / (sigma sqrt(T))
/// d2 = d1 - sigma sqrt(T)
/// C  = S N(d1) - X e^(-rT) N(d2)
/// P  = X e^(-rT) N(-d2) - S N(-d1)
/// ```
pub fn price(params: &MarketParameters) -> BsmResult<PriceResult> {
    validate(params)?;

    let s = params.spot_price;
    let x = params.strike_price;
    let t = params.time_to_maturity;
    let sigma = params.volatility;
    let r = params.risk_free_rate;

    let sigma_sqrt_t = sigma * t.sqrt();
    // A subnormal sigma can still underflow the denominator to zero
    if sigma_sqrt_t <= 0.0 {
        return Err(DomainError::ZeroOrNegativeVolatility(sigma));
    }
    let d1 = ((s / x).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;
    let discounted_strike = x * (-r * t).exp();

    let call_price = s * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
    let put_price = discounted_strike * norm_cdf(-d2) - s * norm_cdf(-d1);

    trace!(s, x, t, sigma, r, d1, d2, call_price, put_price, "priced");

    Ok(PriceResult {
        call_price,
        put_price,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
