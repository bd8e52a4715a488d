use crate::models::Location;
use crate::services::{ReviewError, ReviewService};
use actix_web::{web, Responder, Result};

#[tracing::instrument(name = "Get location.", skip(service), fields(kind = L::LABEL))]
pub async fn get_handler<L: Location>(
    path: web::Path<(i64,)>,
    service: web::Data<ReviewService<L>>,
) -> Result<impl Responder, ReviewError> {
    let (id,) = path.into_inner();
    service.get_location(id).await
}
