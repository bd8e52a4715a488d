//! Review CRUD shared by every location kind.

use super::{LocationLookup, PgLocationLookup, PgReviewRepository, ReviewError, ReviewRepository};
use crate::helpers::{ErrorCode, JsonResponse};
use crate::models::{Location, NewReview, Review, ReviewEdit, ReviewSort};
use sqlx::PgPool;
use std::marker::PhantomData;
use std::sync::Arc;

pub const NO_REVIEWS: &str = "No reviews exist.";
pub const REVIEW_CREATED: &str = "Review has been registered.";
pub const REVIEW_UPDATED: &str = "Review has been updated.";
pub const REVIEW_DELETED: &str = "Review has been deleted.";

/// Review operations for location kind `L`.
///
/// Unknown review ids are reported as `INVALID_REVIEW_ID` envelopes, the
/// `Err` side only carries storage failures.
pub struct ReviewService<L: Location> {
    reviews: Arc<dyn ReviewRepository>,
    locations: Arc<dyn LocationLookup<L>>,
    kind: PhantomData<L>,
}

impl<L: Location> ReviewService<L> {
    pub fn new(reviews: Arc<dyn ReviewRepository>, locations: Arc<dyn LocationLookup<L>>) -> Self {
        Self {
            reviews,
            locations,
            kind: PhantomData,
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgReviewRepository::new::<L>(pool.clone())),
            Arc::new(PgLocationLookup::new(pool)),
        )
    }

    pub async fn get_location(&self, id: i64) -> Result<JsonResponse<L>, ReviewError> {
        self.locations.get_location_by_id(id).await
    }

    #[tracing::instrument(name = "List reviews.", skip(self), fields(kind = L::LABEL))]
    pub async fn list_reviews(
        &self,
        location_id: i64,
        sort: Option<&str>,
    ) -> Result<JsonResponse<Vec<Review>>, ReviewError> {
        let reviews = match ReviewSort::from_param(sort) {
            ReviewSort::RatingDesc => {
                self.reviews
                    .find_by_location_id_order_by_rating_desc(location_id)
                    .await?
            }
            ReviewSort::RatingAsc => {
                self.reviews
                    .find_by_location_id_order_by_rating_asc(location_id)
                    .await?
            }
            ReviewSort::Latest => {
                self.reviews
                    .find_by_location_id_order_by_created_date_desc(location_id)
                    .await?
            }
        };

        if reviews.is_empty() {
            return Ok(JsonResponse::ok(NO_REVIEWS));
        }

        Ok(JsonResponse::ok_with(
            format!("Fetched the {} reviews.", L::LABEL),
            reviews,
        ))
    }

    #[tracing::instrument(name = "Add review.", skip(self), fields(kind = L::LABEL))]
    pub async fn add_review(
        &self,
        new_review: NewReview,
    ) -> Result<JsonResponse<Review>, ReviewError> {
        let location = match self
            .locations
            .get_location_by_id(new_review.location_id)
            .await?
            .into_result()
        {
            Ok(Some(location)) => location,
            Ok(None) => return Ok(JsonResponse::with_error(L::INVALID_ID)),
            Err(code) => return Ok(JsonResponse::with_error(code)),
        };

        let review = self.reviews.save(new_review.into_review(&location)).await?;
        tracing::info!("Review {} added to {} {}", review.id, L::LABEL, location.id());

        Ok(JsonResponse::ok_with(REVIEW_CREATED, review))
    }

    #[tracing::instrument(name = "Update review.", skip(self), fields(kind = L::LABEL))]
    pub async fn update_review(
        &self,
        id: i64,
        edit: ReviewEdit,
    ) -> Result<JsonResponse<Review>, ReviewError> {
        let mut review = match self.reviews.find_by_id(id).await? {
            Some(review) => review,
            None => return Ok(JsonResponse::with_error(ErrorCode::InvalidReviewId)),
        };

        review.update(edit);
        let review = self.reviews.save(review).await?;

        Ok(JsonResponse::ok_with(REVIEW_UPDATED, review))
    }

    #[tracing::instrument(name = "Delete review.", skip(self), fields(kind = L::LABEL))]
    pub async fn delete_review(&self, id: i64) -> Result<JsonResponse<()>, ReviewError> {
        if !self.reviews.exists_by_id(id).await? {
            return Ok(JsonResponse::with_error(ErrorCode::InvalidReviewId));
        }

        // a concurrent delete may win between the check and this call
        if !self.reviews.delete_by_id(id).await? {
            tracing::warn!("Review {} vanished before it could be deleted", id);
            return Ok(JsonResponse::with_error(ErrorCode::InvalidReviewId));
        }

        Ok(JsonResponse::ok(REVIEW_DELETED))
    }
}
