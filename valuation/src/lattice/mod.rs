pub mod binomial;

pub use binomial::BinomialLattice;
