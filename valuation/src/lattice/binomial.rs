use ndarray::Array2;

use crate::common::models::{ExerciseStyle, OptionType};

/// Backward induction on a recombining binomial lattice.
/// https://en.wikipedia.org/wiki/Binomial_options_pricing_model
///
/// The grid is indexed `[[i, j]]` with `i` the number of down-moves and `j` the
/// time step; only cells with `i <= j` are written, the rest stay zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialLattice {
    asset_price: f64,
    strike: f64,
    /// risk-free rate per step
    rfr: f64,
    up: f64,
    down: f64,
    /// risk-neutral probability of an up-move
    probability: f64,
    option_type: OptionType,
    exercise: ExerciseStyle,
}

impl BinomialLattice {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        asset_price: f64,
        strike: f64,
        rfr: f64,
        up: f64,
        down: f64,
        probability: f64,
        option_type: OptionType,
        exercise: ExerciseStyle,
    ) -> Self {
        Self {
            asset_price,
            strike,
            rfr,
            up,
            down,
            probability,
            option_type,
            exercise,
        }
    }

    /// Price of the asset after `j` steps of which `i` were down-moves.
    pub fn node_price(&self, i: usize, j: usize) -> f64 {
        self.asset_price * self.up.powi((j - i) as i32) * self.down.powi(i as i32)
    }

    fn continuation(&self, up_value: f64, down_value: f64) -> f64 {
        (self.probability * up_value + (1.0 - self.probability) * down_value) / (1.0 + self.rfr)
    }

    /// Option values at every node of a lattice with `periods` steps; the root
    /// `[[0, 0]]` is the option's price.
    pub fn price_tree(&self, periods: usize) -> Array2<f64> {
        let mut tree = Array2::<f64>::zeros((periods + 1, periods + 1));

        for i in 0..=periods {
            tree[[i, periods]] = self
                .option_type
                .payoff(self.node_price(i, periods), self.strike);
        }

        for j in (0..periods).rev() {
            for i in 0..=j {
                let cont = self.continuation(tree[[i, j + 1]], tree[[i + 1, j + 1]]);
                tree[[i, j]] = match self.exercise {
                    ExerciseStyle::European => cont,
                    ExerciseStyle::American => {
                        let intrinsic = self.option_type.payoff(self.node_price(i, j), self.strike);
                        if intrinsic > cont {
                            intrinsic
                        } else {
                            cont
                        }
                    }
                };
            }
        }

        tree
    }
}
