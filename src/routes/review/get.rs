use crate::models::Location;
use crate::services::{ReviewError, ReviewService};
use actix_web::{web, Responder, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub sort: Option<String>,
}

#[tracing::instrument(name = "List reviews of a location.", skip(service), fields(kind = L::LABEL))]
pub async fn list_handler<L: Location>(
    path: web::Path<(i64,)>,
    query: web::Query<ListQuery>,
    service: web::Data<ReviewService<L>>,
) -> Result<impl Responder, ReviewError> {
    let (location_id,) = path.into_inner();
    service
        .list_reviews(location_id, query.sort.as_deref())
        .await
}
