#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptionType {
    #[default]
    Call,
    Put,
}

impl OptionType {
    /// Payoff of exercising immediately at the given asset price, floored at zero.
    pub fn payoff(&self, asset_price: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (asset_price - strike).max(0.0),
            OptionType::Put => (strike - asset_price).max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExerciseStyle {
    #[default]
    European,
    American,
}

/// The option's time to expiration.
///
/// The lattice counts whole periods, the closed form takes years. A horizon
/// in years is never treated as a period count, even when integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeHorizon {
    Periods(usize),
    Continuous(f64),
}

impl TimeHorizon {
    pub fn as_f64(&self) -> f64 {
        match *self {
            TimeHorizon::Periods(n) => n as f64,
            TimeHorizon::Continuous(t) => t,
        }
    }

    pub fn periods(&self) -> Option<usize> {
        match *self {
            TimeHorizon::Periods(n) => Some(n),
            TimeHorizon::Continuous(_) => None,
        }
    }
}

/// The raw inputs of an option valuation, fixed once a contract is built.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionParameters {
    /// the risk-free rate per period
    pub rfr: f64,
    /// the asset's price today
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// periods for the lattice, years for the closed form
    pub horizon: TimeHorizon,
    /// the standard deviation of the asset's log-returns
    pub vola: Option<f64>,
    /// multiplicative up-move of the asset price per lattice step
    pub up: Option<f64>,
    /// multiplicative down-move of the asset price per lattice step
    pub down: Option<f64>,
    pub exercise: ExerciseStyle,
    pub option_type: OptionType,
    /// length of a lattice step, used when deriving `up` and `down` from `vola`
    pub time_step: f64,
}

impl OptionParameters {
    pub fn new(rfr: f64, asset_price: f64, strike: f64, horizon: TimeHorizon) -> Self {
        Self {
            rfr,
            asset_price,
            strike,
            horizon,
            vola: None,
            up: None,
            down: None,
            exercise: ExerciseStyle::default(),
            option_type: OptionType::default(),
            time_step: 1.0,
        }
    }

    pub fn with_vola(mut self, vola: f64) -> Self {
        self.vola = Some(vola);
        self
    }

    pub fn with_up(mut self, up: f64) -> Self {
        self.up = Some(up);
        self
    }

    pub fn with_down(mut self, down: f64) -> Self {
        self.down = Some(down);
        self
    }

    pub fn with_exercise(mut self, exercise: ExerciseStyle) -> Self {
        self.exercise = exercise;
        self
    }

    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }
}
