use crate::helpers::{ErrorCode, JsonResponse};
use crate::models::{SmokingArea, Toilet};
use crate::routes;
use crate::services::ReviewService;
use actix_cors::Cors;
use actix_web::{dev::Server, error, middleware, web, App, HttpResponse, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

fn invalid_input<E>(err: E, message: String) -> error::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::BadRequest()
        .json(JsonResponse::<()>::with_error(ErrorCode::InvalidInputValue).with_message(message));
    error::InternalError::from_response(err, response).into()
}

/// Mounts every route. Services are expected as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "deserialize error at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            err => err.to_string(),
        };
        invalid_input(err, message)
    });
    let path_config = web::PathConfig::default().error_handler(|err, req| {
        let message = format!("invalid path {}: {}", req.path(), err);
        invalid_input(err, message)
    });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        invalid_input(err, message)
    });

    cfg.app_data(json_config)
        .app_data(path_config)
        .app_data(query_config)
        .service(web::scope("/health_check").service(routes::health_check))
        .service(web::scope("/toilet").configure(routes::review::configure::<Toilet>))
        .service(web::scope("/smoke").configure(routes::review::configure::<SmokingArea>));
}

pub fn run(listener: TcpListener, pg_pool: PgPool) -> Result<Server, std::io::Error> {
    serve(
        listener,
        ReviewService::postgres(pg_pool.clone()),
        ReviewService::postgres(pg_pool),
    )
}

pub fn serve(
    listener: TcpListener,
    toilet_reviews: ReviewService<Toilet>,
    smoke_reviews: ReviewService<SmokingArea>,
) -> Result<Server, std::io::Error> {
    let toilet_reviews = web::Data::new(toilet_reviews);
    let smoke_reviews = web::Data::new(smoke_reviews);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .app_data(toilet_reviews.clone())
            .app_data(smoke_reviews.clone())
            .configure(configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
