use super::{ReviewError, ReviewRepository};
use crate::models::Review;
use async_trait::async_trait;

/// Sees every review as present but never manages to delete one, like a
/// store where another request always deletes first.
pub struct LosingDeleteReviewRepository;

#[async_trait]
impl ReviewRepository for LosingDeleteReviewRepository {
    async fn find_by_location_id_order_by_rating_desc(
        &self,
        _location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        Ok(vec![])
    }

    async fn find_by_location_id_order_by_rating_asc(
        &self,
        _location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        Ok(vec![])
    }

    async fn find_by_location_id_order_by_created_date_desc(
        &self,
        _location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        Ok(vec![])
    }

    async fn save(&self, review: Review) -> Result<Review, ReviewError> {
        Ok(review)
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Review>, ReviewError> {
        Ok(None)
    }

    async fn exists_by_id(&self, _id: i64) -> Result<bool, ReviewError> {
        Ok(true)
    }

    async fn delete_by_id(&self, _id: i64) -> Result<bool, ReviewError> {
        Ok(false)
    }
}

/// Every call fails as if the database were unreachable.
pub struct UnavailableReviewRepository;

fn unavailable<T>() -> Result<T, ReviewError> {
    Err(ReviewError::Storage(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl ReviewRepository for UnavailableReviewRepository {
    async fn find_by_location_id_order_by_rating_desc(
        &self,
        _location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        unavailable()
    }

    async fn find_by_location_id_order_by_rating_asc(
        &self,
        _location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        unavailable()
    }

    async fn find_by_location_id_order_by_created_date_desc(
        &self,
        _location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        unavailable()
    }

    async fn save(&self, _review: Review) -> Result<Review, ReviewError> {
        unavailable()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Review>, ReviewError> {
        unavailable()
    }

    async fn exists_by_id(&self, _id: i64) -> Result<bool, ReviewError> {
        unavailable()
    }

    async fn delete_by_id(&self, _id: i64) -> Result<bool, ReviewError> {
        unavailable()
    }
}
