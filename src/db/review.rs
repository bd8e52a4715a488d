use crate::models::{self, ReviewSort};
use sqlx::PgPool;
use tracing::Instrument;

fn order_by(sort: ReviewSort) -> &'static str {
    match sort {
        ReviewSort::RatingDesc => "rating DESC, created_date DESC",
        ReviewSort::RatingAsc => "rating ASC, created_date DESC",
        ReviewSort::Latest => "created_date DESC, id DESC",
    }
}

pub async fn fetch(
    pool: &PgPool,
    table: &str,
    id: i64,
) -> Result<Option<models::Review>, sqlx::Error> {
    tracing::info!("Fetch review {} from {}", id, table);
    sqlx::query_as::<_, models::Review>(&format!("SELECT * FROM {} WHERE id = $1", table))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch review, error: {:?}", err);
            err
        })
}

pub async fn fetch_by_location(
    pool: &PgPool,
    table: &str,
    location_id: i64,
    sort: ReviewSort,
) -> Result<Vec<models::Review>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch reviews by location.", table, location_id, ?sort);
    sqlx::query_as::<_, models::Review>(&format!(
        "SELECT * FROM {} WHERE location_id = $1 ORDER BY {}",
        table,
        order_by(sort)
    ))
    .bind(location_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch reviews, error: {:?}", err);
        err
    })
}

pub async fn exists(pool: &PgPool, table: &str, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(&format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
        table
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to check review existence, error: {:?}", err);
        err
    })
}

pub async fn insert(
    pool: &PgPool,
    table: &str,
    review: models::Review,
) -> Result<models::Review, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new review into the database", table);
    sqlx::query_as::<_, models::Review>(&format!(
        r#"
        INSERT INTO {} (username, content, rating, location_id, created_date, modified_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
        table
    ))
    .bind(review.username)
    .bind(review.content)
    .bind(review.rating)
    .bind(review.location_id)
    .bind(review.created_date)
    .bind(review.modified_date)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|review| {
        tracing::info!("New review {} has been saved to {}", review.id, table);
        review
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err
    })
}

pub async fn update(
    pool: &PgPool,
    table: &str,
    review: models::Review,
) -> Result<models::Review, sqlx::Error> {
    let query_span = tracing::info_span!("Updating review", table, id = review.id);
    sqlx::query_as::<_, models::Review>(&format!(
        r#"
        UPDATE {}
        SET
            username=$2,
            content=$3,
            rating=$4,
            location_id=$5,
            modified_date=NOW()
        WHERE id = $1
        RETURNING *
        "#,
        table
    ))
    .bind(review.id)
    .bind(review.username)
    .bind(review.content)
    .bind(review.rating)
    .bind(review.location_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        err
    })
}

#[tracing::instrument(name = "Delete review.", skip(pool))]
pub async fn delete(pool: &PgPool, table: &str, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query::<sqlx::Postgres>(&format!("DELETE FROM {} WHERE id = $1", table))
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete review: {:?}", err);
            err
        })
}
