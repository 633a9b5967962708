use bsm_core::greeks::{MATURITY_BUMP, SPOT_BUMP_FRACTION};
use bsm_core::{estimate_greeks, price, DomainError, MarketParameters};
use pretty_assertions::assert_eq;

// ===========================================================================
// Finite-difference Greeks
// ===========================================================================

fn reference() -> MarketParameters {
    MarketParameters::new(100.0, 100.0, 1.0, 0.2, 0.05)
}

#[test]
fn test_reference_greeks_rounded() {
    let g = estimate_greeks(&reference()).unwrap();
    assert_eq!(format!("{:.2}", g.call_delta), "0.65");
    assert_eq!(format!("{:.2}", g.put_delta), "-0.35");
    assert!((g.call_vega - 37.5).abs() < 0.5);
    assert!((g.call_vega - g.put_vega).abs() < 1e-6);
}

#[test]
fn test_delta_matches_manual_difference_quotient() {
    let params = reference();
    let ds = SPOT_BUMP_FRACTION * params.spot_price;
    let base = price(&params).unwrap();
    let up = price(&params.with_spot(params.spot_price + ds)).unwrap();

    let g = estimate_greeks(&params).unwrap();
    assert_eq!(g.call_delta, (up.call_price - base.call_price) / ds);
    assert_eq!(g.put_delta, (up.put_price - base.put_price) / ds);
}

#[test]
fn test_gamma_call_put_agree_across_moneyness() {
    for s in [70.0, 90.0, 100.0, 115.0, 140.0] {
        let g = estimate_greeks(&reference().with_spot(s)).unwrap();
        let rel = (g.call_gamma - g.put_gamma).abs() / g.call_gamma.abs();
        assert!(rel < 1e-4, "S={s}: {} vs {}", g.call_gamma, g.put_gamma);
        assert!(g.call_gamma > 0.0);
    }
}

#[test]
fn test_delta_bounds() {
    for s in [60.0, 100.0, 160.0] {
        let g = estimate_greeks(&reference().with_spot(s)).unwrap();
        assert!((0.0..=1.0).contains(&g.call_delta), "call delta {}", g.call_delta);
        assert!((-1.0..=0.0).contains(&g.put_delta), "put delta {}", g.put_delta);
    }
}

#[test]
fn test_rho_signs() {
    let g = estimate_greeks(&reference()).unwrap();
    assert!(g.call_rho > 0.0);
    assert!(g.put_rho < 0.0);
}

#[test]
fn test_one_day_maturity_fails_on_theta() {
    let params = reference().with_maturity(MATURITY_BUMP);
    // Prices alone are still defined
    assert!(price(&params).is_ok());
    assert_eq!(
        estimate_greeks(&params),
        Err(DomainError::ZeroOrNegativeMaturity(0.0))
    );
}

#[test]
fn test_two_day_maturity_is_estimated() {
    let params = reference().with_maturity(2.0 * MATURITY_BUMP);
    let g = estimate_greeks(&params).unwrap();
    assert!(g.call_theta < 0.0);
}
