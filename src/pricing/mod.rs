pub mod european;
pub mod payoff;
pub mod valuation;

pub use crate::core::types::OptionType;
