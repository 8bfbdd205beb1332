use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use askama::Template;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::store::flag_object_key;

/// Flag image page. The whole blob is read into memory and inlined as a
/// data URI, so response size grows with blob size.
#[derive(Template)]
#[template(path = "flag.html")]
struct FlagPage {
    code: String,
    payload: String,
}

/// `GET /secure/{code}`: look up `{CODE}.png` and render it inline.
///
/// The route pattern already restricts `code` to two letters; lookup is
/// case-insensitive because the code is normalized to uppercase first.
pub async fn show(
    code: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let code = code.into_inner().to_ascii_uppercase();
    let key = flag_object_key(&code);

    let blob = state
        .store()
        .get(&key)
        .await?
        .ok_or_else(|| AppError::flag_not_found(code.clone()))?;
    debug!(%key, size = blob.len(), "flag fetched");

    let page = FlagPage {
        code,
        payload: STANDARD.encode(&blob),
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page.render()?))
}
