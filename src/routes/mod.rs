pub mod health_checks;
pub mod location;
pub mod review;

pub use health_checks::*;
