mod error;
mod location;
#[cfg(test)]
pub mod mock;
pub mod review;
mod review_repository;

pub use error::ReviewError;
pub use location::{InMemoryLocations, LocationLookup, PgLocationLookup};
pub use review::ReviewService;
pub use review_repository::{InMemoryReviewRepository, PgReviewRepository, ReviewRepository};
