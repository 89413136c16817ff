pub mod error;
pub mod parser;
pub mod transformer;
pub mod twosat;

pub use error::{ParseError, TwoSatError};
