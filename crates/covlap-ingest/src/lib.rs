pub mod error;
pub mod reader;

pub use error::{Error, Result};
pub use reader::{read_holdings, read_holdings_from, REQUIRED_COLUMNS};
