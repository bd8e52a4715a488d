use actix_web::http::StatusCode;
use serde_derive::Serialize;
use std::fmt;

/// Closed set of failure conditions reported inside a [`super::JsonResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidInputValue,
    InvalidReviewId,
    InvalidToiletId,
    InvalidSmokingAreaId,
    InternalServerError,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInputValue => StatusCode::BAD_REQUEST,
            Self::InvalidReviewId => StatusCode::NOT_FOUND,
            Self::InvalidToiletId => StatusCode::NOT_FOUND,
            Self::InvalidSmokingAreaId => StatusCode::NOT_FOUND,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidInputValue => "Invalid input value",
            Self::InvalidReviewId => "Review not found",
            Self::InvalidToiletId => "Toilet not found",
            Self::InvalidSmokingAreaId => "Smoking area not found",
            Self::InternalServerError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::InvalidReviewId).unwrap();
        assert_eq!(json, "\"INVALID_REVIEW_ID\"");

        let json = serde_json::to_string(&ErrorCode::InvalidSmokingAreaId).unwrap();
        assert_eq!(json, "\"INVALID_SMOKING_AREA_ID\"");
    }

    #[test]
    fn lookup_failures_map_to_not_found() {
        assert_eq!(ErrorCode::InvalidReviewId.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::InvalidToiletId.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::InvalidInputValue.status(), StatusCode::BAD_REQUEST);
    }
}
