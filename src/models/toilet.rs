use super::Location;
use crate::helpers::ErrorCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Toilet {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub opening_hours: Option<String>,
}

impl Location for Toilet {
    const TABLE: &'static str = "toilet";
    const REVIEW_TABLE: &'static str = "toilet_review";
    const LABEL: &'static str = "public toilet";
    const INVALID_ID: ErrorCode = ErrorCode::InvalidToiletId;

    fn id(&self) -> i64 {
        self.id
    }
}
