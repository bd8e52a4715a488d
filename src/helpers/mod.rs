mod error_code;
pub(crate) mod json;

pub use error_code::ErrorCode;
pub use json::*;
