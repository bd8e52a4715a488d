use super::Location;
use crate::helpers::ErrorCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SmokingArea {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location for SmokingArea {
    const TABLE: &'static str = "smoking_area";
    const REVIEW_TABLE: &'static str = "smoke_review";
    const LABEL: &'static str = "smoking area";
    const INVALID_ID: ErrorCode = ErrorCode::InvalidSmokingAreaId;

    fn id(&self) -> i64 {
        self.id
    }
}
