use actix_web::error::ResponseError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use askama::Template;
use thiserror::Error;
use tracing::warn;

use crate::routes::BASE_PATH;
use crate::store::StoreError;

/// HTML shell rendered for every error response. Error pages use the same
/// document shell as success pages; raw internals never reach the body.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage {
    title: &'static str,
    message: String,
    code: &'static str,
    back: Option<&'static str>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no credential cookie presented")]
    Unauthenticated,
    #[error("credential token has {segments} segments")]
    MalformedToken { segments: usize },
    #[error("credential payload decode failed: {detail}")]
    TokenDecode { detail: String },
    #[error("no flag object for {code}")]
    FlagNotFound { code: String },
    #[error("no route matched")]
    RouteNotFound,
    #[error("flag store error: {detail}")]
    Store { detail: String },
    #[error("configuration error: {detail}")]
    Config { detail: String },
    #[error("internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated
    }

    pub fn malformed_token(segments: usize) -> Self {
        Self::MalformedToken { segments }
    }

    pub fn token_decode(detail: impl Into<String>) -> Self {
        Self::TokenDecode {
            detail: detail.into(),
        }
    }

    pub fn flag_not_found(code: impl Into<String>) -> Self {
        Self::FlagNotFound { code: code.into() }
    }

    pub fn route_not_found() -> Self {
        Self::RouteNotFound
    }

    pub fn store(detail: impl Into<String>) -> Self {
        Self::Store {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Canonical SCREAMING_SNAKE_CASE code shown in the page footer.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "UNAUTHENTICATED",
            AppError::MalformedToken { .. } => "MALFORMED_TOKEN",
            AppError::TokenDecode { .. } => "TOKEN_DECODE",
            AppError::FlagNotFound { .. } => "FLAG_NOT_FOUND",
            AppError::RouteNotFound => "ROUTE_NOT_FOUND",
            AppError::Store { .. } => "STORE_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::MalformedToken { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TokenDecode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::FlagNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "Sign-in required",
            AppError::MalformedToken { .. } | AppError::TokenDecode { .. } => "Credential error",
            AppError::FlagNotFound { .. } | AppError::RouteNotFound => "Not Found",
            AppError::Store { .. } | AppError::Config { .. } | AppError::Internal { .. } => {
                "Something went wrong"
            }
        }
    }

    /// User-facing message. 500-class variants stay generic; the underlying
    /// detail is logged, never rendered.
    fn message(&self) -> String {
        match self {
            AppError::Unauthenticated => {
                "No credential cookie was presented. This page is only reachable \
                 through the access layer in front of it."
                    .to_string()
            }
            AppError::MalformedToken { .. } => {
                "The credential token is not in the expected three-segment format.".to_string()
            }
            AppError::TokenDecode { .. } => {
                "The credential token payload could not be decoded.".to_string()
            }
            AppError::FlagNotFound { code } => format!("No flag is stored for {code}."),
            AppError::RouteNotFound => format!("Not Found. Try {BASE_PATH}"),
            AppError::Store { .. } => "The flag store is temporarily unavailable.".to_string(),
            AppError::Config { .. } | AppError::Internal { .. } => {
                "The request could not be handled.".to_string()
            }
        }
    }

    fn back(&self) -> Option<&'static str> {
        match self {
            AppError::FlagNotFound { .. } | AppError::RouteNotFound => Some(BASE_PATH),
            _ => None,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::store(e.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::internal(format!("template render failed: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        if status.is_server_error() {
            warn!(code = self.code(), error = %self, "request failed");
        }

        let page = ErrorPage {
            title: self.title(),
            message: self.message(),
            code: self.code(),
            back: self.back(),
        };
        let body = page.render().unwrap_or_else(|_| self.message());

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body)
    }
}
