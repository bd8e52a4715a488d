use crate::models::Location;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch<L: Location>(pool: &PgPool, id: i64) -> Result<Option<L>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch location by id.", table = L::TABLE, id);
    sqlx::query_as::<_, L>(&format!("SELECT * FROM {} WHERE id = $1", L::TABLE))
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch {}: {:?}", L::LABEL, err);
            err
        })
}
