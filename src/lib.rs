pub mod algorithm;
pub mod basic_terminal;
pub mod comparison;
pub mod config;
pub mod input;
pub mod similarity;
pub mod stats;
pub mod validate;

pub type DynResult<T> = Result<T, Box<dyn std::error::Error>>;
