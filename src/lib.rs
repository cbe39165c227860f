pub mod cedict;
pub mod utility;
