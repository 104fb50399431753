use crate::analytic::BlackScholesTerms;
use crate::common::models::OptionParameters;
use crate::error::{ValuationError, ValuationResult};

/// Quantities computed once from the raw inputs.
///
/// Each one is either fully defined or absent; an absent quantity is an error
/// on access, never a default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    up: Option<f64>,
    down: Option<f64>,
    probability: Option<f64>,
    bs_terms: Option<BlackScholesTerms>,
}

impl DerivedQuantities {
    pub fn from_parameters(params: &OptionParameters) -> Self {
        let step_vola = params.vola.map(|vola| vola * params.time_step.sqrt());
        let up = params.up.or_else(|| step_vola.map(|sv| sv.exp()));
        let down = params.down.or_else(|| step_vola.map(|sv| (-sv).exp()));

        // risk-neutral probability of an up-move
        let probability = match (up, down) {
            (Some(u), Some(d)) => Some((1.0 + params.rfr - d) / (u - d)),
            _ => None,
        };

        let bs_terms = params.vola.map(|vola| {
            BlackScholesTerms::new(
                params.asset_price,
                params.strike,
                params.rfr,
                params.horizon.as_f64(),
                vola,
            )
        });

        Self {
            up,
            down,
            probability,
            bs_terms,
        }
    }

    pub fn up(&self) -> ValuationResult<f64> {
        self.up.ok_or(ValuationError::MissingQuantity("up-factor u"))
    }

    pub fn down(&self) -> ValuationResult<f64> {
        self.down.ok_or(ValuationError::MissingQuantity("down-factor d"))
    }

    pub fn probability(&self) -> ValuationResult<f64> {
        self.probability
            .ok_or(ValuationError::MissingQuantity("risk-neutral probability p"))
    }

    pub fn bs_terms(&self) -> ValuationResult<BlackScholesTerms> {
        self.bs_terms.ok_or(ValuationError::MissingQuantity("d1 and d2"))
    }
}
