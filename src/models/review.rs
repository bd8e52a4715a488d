use super::Location;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64, // 0 until persisted
    pub username: String,
    pub content: String,
    pub rating: i32, // 1..=5, checked by the forms only
    pub location_id: i64,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

/// Fields needed to create a review, before the location is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub username: String,
    pub content: String,
    pub rating: i32,
    pub location_id: i64,
}

/// Replacement content and rating for an existing review.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEdit {
    pub content: String,
    pub rating: i32,
}

impl NewReview {
    pub fn into_review<L: Location>(self, location: &L) -> Review {
        let now = Utc::now();
        Review {
            id: 0,
            username: self.username,
            content: self.content,
            rating: self.rating,
            location_id: location.id(),
            created_date: now,
            modified_date: now,
        }
    }
}

impl Review {
    pub fn update(&mut self, edit: ReviewEdit) {
        self.content = edit.content;
        self.rating = edit.rating;
    }
}

/// Order of a review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSort {
    RatingDesc,
    RatingAsc,
    #[default]
    Latest,
}

impl ReviewSort {
    /// `ratingDesc` and `ratingAsc` match case-insensitively, anything else is `Latest`.
    pub fn from_param(sort: Option<&str>) -> Self {
        match sort {
            Some(s) if s.eq_ignore_ascii_case("ratingDesc") => Self::RatingDesc,
            Some(s) if s.eq_ignore_ascii_case("ratingAsc") => Self::RatingAsc,
            _ => Self::Latest,
        }
    }
}
