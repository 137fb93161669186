use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::{Display, Error};

use crate::views;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[display(fmt = "{}", message)]
    Transport { message: String },

    #[display(fmt = "timeout")]
    Timeout,

    #[display(fmt = "{}", message)]
    Api { message: String },

    #[display(fmt = "unexpected response from the events API: {}", message)]
    Decode { message: String },

    #[display(fmt = "{}", message)]
    NotFound { message: String },

    #[display(fmt = "unknown GraphQL document")]
    UnknownDocument,

    #[display(fmt = "could not render page: {}", message)]
    Render { message: String },

    #[display(fmt = "bad request")]
    BadClientData,

    #[display(fmt = "unauthorized")]
    Unauthorized,
}

impl AppError {
    pub fn transport(message: impl Into<String>) -> Self {
        AppError::Transport { message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound { message: message.into() }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        AppError::Decode { message: message.into() }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout
        } else if err.is_decode() {
            AppError::decode(err.to_string())
        } else {
            AppError::transport(err.to_string())
        }
    }
}

impl error::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        match views::page::error_page(&self.to_string()) {
            Ok(markup) => res.insert_header(ContentType::html()).body(markup),
            Err(_) => res.insert_header(ContentType::plaintext()).body(self.to_string()),
        }
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            AppError::Transport { .. } => StatusCode::BAD_GATEWAY,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Api { .. } => StatusCode::BAD_REQUEST,
            AppError::Decode { .. } => StatusCode::BAD_GATEWAY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UnknownDocument => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadClientData => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}
