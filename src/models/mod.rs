mod location;
pub mod review;
mod smoking_area;
mod toilet;

pub use location::*;
pub use review::*;
pub use smoking_area::*;
pub use toilet::*;
