use actix_web::{get, HttpResponse};

#[get("")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
