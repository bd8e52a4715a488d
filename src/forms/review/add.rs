use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddReview {
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub username: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 1000)]
    pub content: String,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rating: i32,
    #[serde(alias = "toiletId", alias = "smokingAreaId")]
    pub location_id: i64,
}

impl From<AddReview> for models::NewReview {
    fn from(form: AddReview) -> Self {
        Self {
            username: form.username,
            content: form.content,
            rating: form.rating,
            location_id: form.location_id,
        }
    }
}
