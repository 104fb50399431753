use ndarray::Array2;

use crate::analytic::black_scholes;
use crate::common::derived::DerivedQuantities;
use crate::common::models::{OptionParameters, OptionType, TimeHorizon};
use crate::error::{ValuationError, ValuationResult};
use crate::lattice::BinomialLattice;

/// An option together with the results of its latest valuation.
///
/// Inputs are fixed at construction. `value` holds the price from whichever
/// method completed last; a failed call leaves it and the lattice untouched.
#[derive(Debug, Clone)]
pub struct OptionContract {
    params: OptionParameters,
    derived: DerivedQuantities,
    value: Option<f64>,
    binomial_tree: Option<Array2<f64>>,
}

impl OptionContract {
    pub fn new(params: OptionParameters) -> Self {
        let derived = DerivedQuantities::from_parameters(&params);
        Self {
            params,
            derived,
            value: None,
            binomial_tree: None,
        }
    }

    pub fn parameters(&self) -> &OptionParameters {
        &self.params
    }

    pub fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    /// The most recently computed price, if any.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// The lattice retained by the last successful `binomial_model` call.
    pub fn binomial_tree(&self) -> Option<&Array2<f64>> {
        self.binomial_tree.as_ref()
    }

    /// Values the option on the binomial lattice and keeps the whole grid.
    ///
    /// Needs a horizon in whole periods and defined `u`, `d` and `p`.
    pub fn binomial_model(&mut self) -> ValuationResult<&Array2<f64>> {
        let periods = match self.params.horizon {
            TimeHorizon::Periods(n) => n,
            TimeHorizon::Continuous(t) => return Err(ValuationError::InvalidTimeHorizon(t)),
        };
        let lattice = BinomialLattice::new(
            self.params.asset_price,
            self.params.strike,
            self.params.rfr,
            self.derived.up()?,
            self.derived.down()?,
            self.derived.probability()?,
            self.params.option_type,
            self.params.exercise,
        );
        tracing::debug!(
            periods,
            option_type = ?self.params.option_type,
            exercise = ?self.params.exercise,
            "using binomial model"
        );

        let tree = lattice.price_tree(periods);
        let value = tree[[0, 0]];
        self.value = Some(value);
        tracing::debug!(value, "binomial valuation done");

        let tree: &Array2<f64> = self.binomial_tree.insert(tree);
        Ok(tree)
    }

    /// Values the option with the Black-Scholes formula for a call.
    ///
    /// The call formula is applied whatever the contract's option type; there
    /// is no closed-form put here.
    pub fn black_scholes_formula(&mut self) -> ValuationResult<f64> {
        let terms = self.derived.bs_terms()?;
        if self.params.option_type == OptionType::Put {
            tracing::warn!("contract is a put but the Black-Scholes formula prices a call");
        }
        tracing::debug!(d1 = terms.d1, d2 = terms.d2, "using the Black-Scholes formula");

        let value = black_scholes::call_value(
            self.params.asset_price,
            self.params.strike,
            self.params.rfr,
            self.params.horizon.as_f64(),
            &terms,
        );
        self.value = Some(value);
        Ok(value)
    }

    /// Opt-in no-arbitrage check: the risk-neutral probability must lie in `[0, 1]`.
    /// The valuation methods never run it themselves.
    pub fn check_probability(&self) -> ValuationResult<f64> {
        let p = self.derived.probability()?;
        if (0.0..=1.0).contains(&p) {
            Ok(p)
        } else {
            Err(ValuationError::ProbabilityOutOfRange(p))
        }
    }
}
