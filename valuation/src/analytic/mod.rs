pub mod black_scholes;

pub use black_scholes::BlackScholesTerms;
