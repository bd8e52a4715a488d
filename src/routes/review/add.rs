use crate::forms;
use crate::helpers::{ErrorCode, JsonResponse};
use crate::models::{Location, Review};
use crate::services::{ReviewError, ReviewService};
use actix_web::{web, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Add review.", skip(service), fields(kind = L::LABEL))]
pub async fn add_handler<L: Location>(
    form: web::Json<forms::review::Add>,
    service: web::Data<ReviewService<L>>,
) -> Result<JsonResponse<Review>, ReviewError> {
    if let Err(errors) = form.validate() {
        return Ok(JsonResponse::with_error(ErrorCode::InvalidInputValue)
            .with_message(errors.to_string()));
    }

    service.add_review(form.into_inner().into()).await
}
