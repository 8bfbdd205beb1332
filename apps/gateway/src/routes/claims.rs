use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use askama::Template;
use tracing::debug;

use crate::auth::claims::{decode_unverified, http_date};
use crate::error::AppError;
use crate::extractors::access_token::AccessToken;

const UNKNOWN: &str = "Unknown";

/// Identity summary for the signed-in user. Every interpolation is
/// HTML-escaped by the template engine, including the country inside the
/// link's `href`.
#[derive(Template)]
#[template(path = "claims.html")]
struct ClaimsPage {
    email: String,
    issued_at: String,
    country: String,
}

/// `GET /secure`: decode the identity cookie's token and render the claims.
pub async fn show(token: AccessToken) -> Result<HttpResponse, AppError> {
    let claims = decode_unverified(&token.token)?;
    debug!(
        has_email = claims.email.is_some(),
        has_country = claims.country.is_some(),
        "claims decoded"
    );

    let page = ClaimsPage {
        email: claims.email.unwrap_or_else(|| UNKNOWN.to_string()),
        issued_at: claims
            .iat
            .and_then(http_date)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        country: claims.country.unwrap_or_else(|| UNKNOWN.to_string()),
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page.render()?))
}
