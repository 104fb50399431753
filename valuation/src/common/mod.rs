pub mod derived;
pub mod models;

pub use derived::DerivedQuantities;
pub use models::{ExerciseStyle, OptionParameters, OptionType, TimeHorizon};
