use actix_web::{web, HttpResponse};

use crate::error::AppError;

pub mod claims;
pub mod flags;

/// Route prefix the access layer protects. The claims page lives at the
/// prefix itself, flag pages one segment below it.
pub const BASE_PATH: &str = "/secure";

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::route_not_found())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure_routes)
        .service(
            web::scope(BASE_PATH)
                .route("", web::get().to(claims::show))
                .route("/{code:[A-Za-z]{2}}", web::get().to(flags::show)),
        )
        .default_service(web::route().to(not_found));
}
