use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::cookie::cookie_value;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Credential token extracted from the access layer's identity cookie.
///
/// Presence of the cookie is taken as proof that the upstream access layer
/// authenticated the request; the token itself is decoded later without
/// signature verification.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
}

impl FromRequest for AccessToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not found"))?;

            let cookie_header = req
                .headers()
                .get(header::COOKIE)
                .ok_or_else(AppError::unauthenticated)?;

            let cookie_header = cookie_header
                .to_str()
                .map_err(|_| AppError::unauthenticated())?;

            let token = cookie_value(cookie_header, app_state.access().cookie_name())
                .ok_or_else(AppError::unauthenticated)?;

            if token.is_empty() {
                return Err(AppError::unauthenticated());
            }

            Ok(AccessToken {
                token: token.to_string(),
            })
        })
    }
}
