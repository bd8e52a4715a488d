use super::ReviewError;
use crate::db;
use crate::models::{Location, Review, ReviewSort};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Storage port for one review variant.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_location_id_order_by_rating_desc(
        &self,
        location_id: i64,
    ) -> Result<Vec<Review>, ReviewError>;

    async fn find_by_location_id_order_by_rating_asc(
        &self,
        location_id: i64,
    ) -> Result<Vec<Review>, ReviewError>;

    async fn find_by_location_id_order_by_created_date_desc(
        &self,
        location_id: i64,
    ) -> Result<Vec<Review>, ReviewError>;

    /// Inserts when `review.id == 0`, updates otherwise.
    async fn save(&self, review: Review) -> Result<Review, ReviewError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, ReviewError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, ReviewError>;

    /// Returns false when there was nothing to delete.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ReviewError>;
}

pub struct PgReviewRepository {
    pool: PgPool,
    table: &'static str,
}

impl PgReviewRepository {
    pub fn new<L: Location>(pool: PgPool) -> Self {
        Self {
            pool,
            table: L::REVIEW_TABLE,
        }
    }

    async fn find_by_location(
        &self,
        location_id: i64,
        sort: ReviewSort,
    ) -> Result<Vec<Review>, ReviewError> {
        let reviews =
            db::review::fetch_by_location(&self.pool, self.table, location_id, sort).await?;
        Ok(reviews)
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn find_by_location_id_order_by_rating_desc(
        &self,
        location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        self.find_by_location(location_id, ReviewSort::RatingDesc)
            .await
    }

    async fn find_by_location_id_order_by_rating_asc(
        &self,
        location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        self.find_by_location(location_id, ReviewSort::RatingAsc).await
    }

    async fn find_by_location_id_order_by_created_date_desc(
        &self,
        location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        self.find_by_location(location_id, ReviewSort::Latest).await
    }

    async fn save(&self, review: Review) -> Result<Review, ReviewError> {
        let saved = match review.id {
            0 => db::review::insert(&self.pool, self.table, review).await?,
            _ => db::review::update(&self.pool, self.table, review).await?,
        };
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, ReviewError> {
        Ok(db::review::fetch(&self.pool, self.table, id).await?)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ReviewError> {
        Ok(db::review::exists(&self.pool, self.table, id).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ReviewError> {
        Ok(db::review::delete(&self.pool, self.table, id).await?)
    }
}

#[derive(Default)]
struct MemoryStore {
    last_id: i64,
    rows: BTreeMap<i64, Review>,
}

/// Process-local repository. Ids come from a counter and are never reused.
#[derive(Default)]
pub struct InMemoryReviewRepository {
    store: RwLock<MemoryStore>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn find_by_location(&self, location_id: i64, sort: ReviewSort) -> Vec<Review> {
        let store = self.store.read().await;
        let mut reviews: Vec<Review> = store
            .rows
            .values()
            .filter(|review| review.location_id == location_id)
            .cloned()
            .collect();

        reviews.sort_by(|a, b| match sort {
            ReviewSort::RatingDesc => b
                .rating
                .cmp(&a.rating)
                .then(b.created_date.cmp(&a.created_date)),
            ReviewSort::RatingAsc => a
                .rating
                .cmp(&b.rating)
                .then(b.created_date.cmp(&a.created_date)),
            ReviewSort::Latest => b
                .created_date
                .cmp(&a.created_date)
                .then(b.id.cmp(&a.id)),
        });
        reviews
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_location_id_order_by_rating_desc(
        &self,
        location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        Ok(self.find_by_location(location_id, ReviewSort::RatingDesc).await)
    }

    async fn find_by_location_id_order_by_rating_asc(
        &self,
        location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        Ok(self.find_by_location(location_id, ReviewSort::RatingAsc).await)
    }

    async fn find_by_location_id_order_by_created_date_desc(
        &self,
        location_id: i64,
    ) -> Result<Vec<Review>, ReviewError> {
        Ok(self.find_by_location(location_id, ReviewSort::Latest).await)
    }

    async fn save(&self, mut review: Review) -> Result<Review, ReviewError> {
        let mut store = self.store.write().await;
        if review.id == 0 {
            store.last_id += 1;
            review.id = store.last_id;
        } else {
            // same contract as the UPDATE statement: the row must exist
            let stored = store
                .rows
                .get(&review.id)
                .ok_or(ReviewError::Storage(sqlx::Error::RowNotFound))?;
            review.created_date = stored.created_date;
            review.modified_date = Utc::now();
        }

        store.rows.insert(review.id, review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, ReviewError> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ReviewError> {
        Ok(self.store.read().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ReviewError> {
        Ok(self.store.write().await.rows.remove(&id).is_some())
    }
}
