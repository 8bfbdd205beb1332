mod common;

use actix_web::{test, web, App};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use common::{body_string, failing_state, state_with_flags};
use gateway::{routes, AppState, SecurityHeaders};

// Not a real image, but close enough: PNG magic followed by non-ascii bytes
// that would corrupt if the data URI round-trip were lossy.
const PNG_BLOB: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x01, 0xfe, 0xff, 0x7f, 0x80,
];

async fn get_page(state: AppState, uri: &str) -> (actix_web::http::StatusCode, String) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = resp.status();
    (status, body_string(resp).await)
}

fn embedded_payload(body: &str) -> &str {
    let marker = "data:image/png;base64,";
    let start = body.find(marker).expect("data URI missing") + marker.len();
    let end = body[start..].find('"').expect("unterminated src") + start;
    &body[start..end]
}

#[actix_web::test]
async fn lowercase_code_serves_normalized_flag() {
    let state = state_with_flags(&[("US.png", PNG_BLOB)]);
    let (status, body) = get_page(state, "/secure/us").await;

    assert_eq!(status.as_u16(), 200);
    assert!(body.contains("Flag of US"));

    let decoded = STANDARD.decode(embedded_payload(&body)).unwrap();
    assert_eq!(decoded, PNG_BLOB, "data URI must round-trip the stored blob");
}

#[actix_web::test]
async fn uppercase_code_serves_the_same_flag() {
    let state = state_with_flags(&[("US.png", PNG_BLOB)]);
    let (status, body) = get_page(state, "/secure/US").await;

    assert_eq!(status.as_u16(), 200);
    let decoded = STANDARD.decode(embedded_payload(&body)).unwrap();
    assert_eq!(decoded, PNG_BLOB);
}

#[actix_web::test]
async fn flag_page_links_back_to_claims_page() {
    let state = state_with_flags(&[("US.png", PNG_BLOB)]);
    let (_, body) = get_page(state, "/secure/us").await;
    assert!(body.contains(r#"<a href="/secure">"#));
}

#[actix_web::test]
async fn unknown_code_is_not_found_and_named() {
    let state = state_with_flags(&[("US.png", PNG_BLOB)]);
    let (status, body) = get_page(state, "/secure/ZZ").await;

    assert_eq!(status.as_u16(), 404);
    assert!(body.contains("ZZ"));
    assert!(body.contains(r#"<a href="/secure">"#));
}

#[actix_web::test]
async fn three_letter_code_does_not_route() {
    let (status, body) = get_page(state_with_flags(&[]), "/secure/usa").await;
    assert_eq!(status.as_u16(), 404);
    assert!(body.contains("Not Found. Try /secure"));
}

#[actix_web::test]
async fn unrelated_path_is_not_found() {
    let (status, body) = get_page(state_with_flags(&[]), "/nope").await;
    assert_eq!(status.as_u16(), 404);
    assert!(body.contains("Not Found. Try /secure"));
}

#[actix_web::test]
async fn store_failure_is_a_generic_500() {
    let (status, body) = get_page(failing_state(), "/secure/us").await;

    assert_eq!(status.as_u16(), 500);
    assert!(body.contains("temporarily unavailable"));
    assert!(
        !body.contains("injected failure"),
        "store internals leaked into the body: {body}"
    );
}

#[actix_web::test]
async fn health_returns_ok() {
    let (status, body) = get_page(state_with_flags(&[]), "/health").await;
    assert_eq!(status.as_u16(), 200);
    assert_eq!(body, "ok");
}

#[actix_web::test]
async fn security_headers_are_set() {
    let app = test::init_service(
        App::new()
            .wrap(SecurityHeaders)
            .app_data(web::Data::new(state_with_flags(&[])))
            .configure(routes::configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let hsts = resp
        .headers()
        .get("strict-transport-security")
        .and_then(|v| v.to_str().ok());
    assert_eq!(hsts, Some("max-age=31536000; includeSubDomains"));
    assert!(resp.headers().contains_key("content-security-policy"));
}
