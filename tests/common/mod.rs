#![allow(dead_code)]

use ohmystomach::configuration::{get_configuration, DatabaseSettings};
use ohmystomach::models::{SmokingArea, Toilet};
use ohmystomach::services::{InMemoryLocations, InMemoryReviewRepository, ReviewService};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use std::sync::Arc;

pub const TOILET_ID: i64 = 10;
pub const SMOKING_AREA_ID: i64 = 20;

pub struct TestApp {
    pub address: String,
}

pub struct PgTestApp {
    pub address: String,
    pub db_pool: PgPool,
}

fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    (listener, format!("http://127.0.0.1:{}", port))
}

/// Server over in-memory storage with one toilet and one smoking area.
pub async fn spawn_app() -> TestApp {
    let (listener, address) = bind();

    let toilets = Arc::new(InMemoryLocations::new());
    toilets
        .insert(Toilet {
            id: TOILET_ID,
            name: "Seoul Station".to_string(),
            address: "405 Hangang-daero".to_string(),
            ..Default::default()
        })
        .await;

    let areas = Arc::new(InMemoryLocations::new());
    areas
        .insert(SmokingArea {
            id: SMOKING_AREA_ID,
            name: "Gate 3".to_string(),
            ..Default::default()
        })
        .await;

    let server = ohmystomach::startup::serve(
        listener,
        ReviewService::<Toilet>::new(Arc::new(InMemoryReviewRepository::new()), toilets),
        ReviewService::<SmokingArea>::new(Arc::new(InMemoryReviewRepository::new()), areas),
    )
    .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    TestApp { address }
}

/// Server over a throwaway PostgreSQL database, `None` when no server is reachable.
pub async fn spawn_app_with_postgres() -> Option<PgTestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let db_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let (listener, address) = bind();
    let server =
        ohmystomach::startup::run(listener, db_pool.clone()).expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    Some(PgTestApp { address, db_pool })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

pub async fn insert_toilet(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO toilet (name, address, latitude, longitude) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind("405 Hangang-daero")
    .bind(37.5547)
    .bind(126.9707)
    .fetch_one(pool)
    .await
    .expect("Failed to insert toilet")
}
