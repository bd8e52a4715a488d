use crate::forms;
use crate::helpers::{ErrorCode, JsonResponse};
use crate::models::{Location, Review};
use crate::services::{ReviewError, ReviewService};
use actix_web::{web, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Edit review.", skip(service), fields(kind = L::LABEL))]
pub async fn edit_handler<L: Location>(
    path: web::Path<(i64,)>,
    form: web::Json<forms::review::Edit>,
    service: web::Data<ReviewService<L>>,
) -> Result<JsonResponse<Review>, ReviewError> {
    if let Err(errors) = form.validate() {
        return Ok(JsonResponse::with_error(ErrorCode::InvalidInputValue)
            .with_message(errors.to_string()));
    }

    let (id,) = path.into_inner();
    service.update_review(id, form.into_inner().into()).await
}
