use probability::distribution::{Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

/// The standardized normal arguments of the Black-Scholes formula.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
///
/// `d2` is taken as `d1 - sigma * T`, which agrees with the textbook
/// `d1 - sigma * sqrt(T)` only for a horizon of one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesTerms {
    pub d1: f64,
    pub d2: f64,
}

impl BlackScholesTerms {
    pub fn new(asset_price: f64, strike: f64, rfr: f64, horizon: f64, vola: f64) -> Self {
        let sigma_exp = vola * horizon.sqrt();
        let d1 = ((asset_price / strike).ln() + rfr * horizon) / sigma_exp + 0.5 * sigma_exp;
        let d2 = d1 - vola * horizon;
        Self { d1, d2 }
    }
}

/// Theoretical value of a European call.
pub fn call_value(
    asset_price: f64,
    strike: f64,
    rfr: f64,
    horizon: f64,
    terms: &BlackScholesTerms,
) -> f64 {
    asset_price * cdf(terms.d1) - strike * (-rfr * horizon).exp() * cdf(terms.d2)
}
