mod add;
mod delete;
mod edit;
mod get;

pub use add::*;
pub use delete::*;
pub use edit::*;
pub use get::*;

use crate::models::Location;
use crate::routes::location;
use actix_web::web;

/// Review and location routes of one location kind, mounted under its scope.
pub fn configure<L: Location>(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/reviews").route(web::post().to(add_handler::<L>)))
        .service(
            web::resource("/reviews/{id}")
                .route(web::put().to(edit_handler::<L>))
                .route(web::delete().to(delete_handler::<L>)),
        )
        .service(web::resource("/{location_id}/reviews").route(web::get().to(list_handler::<L>)))
        .service(web::resource("/{location_id}").route(web::get().to(location::get_handler::<L>)));
}
