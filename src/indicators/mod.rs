pub mod error;
pub mod parser;
pub mod registry;
pub mod validation;

pub mod momentum;
pub mod options;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use error::{ErrorKind, IndicatorError, Result};
pub use parser::*;
pub use registry::*;
pub use validation::*;

pub use momentum::*;
pub use options::*;
pub use structure::*;
pub use trend::*;
pub use volatility::*;
pub use volume::*;
