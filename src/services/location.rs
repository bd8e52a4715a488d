use super::ReviewError;
use crate::db;
use crate::helpers::JsonResponse;
use crate::models::Location;
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Resolves the location a review gets attached to.
#[async_trait]
pub trait LocationLookup<L: Location>: Send + Sync {
    /// Success envelope with the location, or an `L::INVALID_ID` error envelope.
    async fn get_location_by_id(&self, id: i64) -> Result<JsonResponse<L>, ReviewError>;
}

fn found<L: Location>(location: Option<L>) -> JsonResponse<L> {
    match location {
        Some(location) => JsonResponse::ok_with(format!("Found the {}.", L::LABEL), location),
        None => JsonResponse::with_error(L::INVALID_ID),
    }
}

pub struct PgLocationLookup {
    pool: PgPool,
}

impl PgLocationLookup {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<L: Location> LocationLookup<L> for PgLocationLookup {
    async fn get_location_by_id(&self, id: i64) -> Result<JsonResponse<L>, ReviewError> {
        let location = db::location::fetch::<L>(&self.pool, id).await?;
        Ok(found(location))
    }
}

/// Process-local location table.
pub struct InMemoryLocations<L> {
    locations: RwLock<HashMap<i64, L>>,
}

impl<L: Location> InMemoryLocations<L> {
    pub fn new() -> Self {
        Self {
            locations: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, location: L) {
        self.locations.write().await.insert(location.id(), location);
    }
}

impl<L: Location> Default for InMemoryLocations<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<L: Location> LocationLookup<L> for InMemoryLocations<L> {
    async fn get_location_by_id(&self, id: i64) -> Result<JsonResponse<L>, ReviewError> {
        let location = self.locations.read().await.get(&id).cloned();
        Ok(found(location))
    }
}
