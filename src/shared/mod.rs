pub mod errors;
pub mod constants;
pub mod logging;

pub use errors::{MenuError, Result};
