use crate::helpers::ErrorCode;
use serde::Serialize;
use sqlx::postgres::PgRow;
use std::fmt::Debug;

/// A place reviews can be attached to.
///
/// Each implementor names its own storage tables, so the review machinery
/// is written once and instantiated per location kind.
pub trait Location:
    Serialize + Clone + Debug + Send + Sync + Unpin + for<'r> sqlx::FromRow<'r, PgRow> + 'static
{
    /// Table holding the locations themselves.
    const TABLE: &'static str;
    /// Table holding reviews of this location kind.
    const REVIEW_TABLE: &'static str;
    /// Human readable name used in response messages.
    const LABEL: &'static str;
    /// Reported when a lookup by id finds nothing.
    const INVALID_ID: ErrorCode;

    fn id(&self) -> i64;
}
