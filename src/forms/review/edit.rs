use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct EditReview {
    #[validate(min_length = 1)]
    #[validate(max_length = 1000)]
    pub content: String,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rating: i32,
}

impl From<EditReview> for models::ReviewEdit {
    fn from(form: EditReview) -> Self {
        Self {
            content: form.content,
            rating: form.rating,
        }
    }
}
