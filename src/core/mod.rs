pub mod error;
pub mod rewrite;

pub use error::{Error, ErrorCode, Result};
