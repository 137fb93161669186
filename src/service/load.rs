use std::{collections::HashMap, future::Future, time::Duration};

use actix_web::{
    http::header::{CacheControl, CacheDirective, ContentType},
    web, HttpRequest, HttpResponse, ResponseError,
};
use log::info;

use crate::{config::Settings, errors::AppError, views};

/// Query parameter the loading page adds when it refreshes.
pub const WAITED: &str = "waited";

/// Where a page's single query stands when the page is rendered.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    Pending,
    Failed(AppError),
    Ready(T),
}

/// How long `req` may wait for its query.
///
/// A first visit gets `loading_patience`. A visit coming back from the
/// loading page waits past the API client's own timeout, so it can only end
/// `Ready` or `Failed`.
pub fn patience(req: &HttpRequest, settings: &Settings) -> Duration {
    if has_waited(req) {
        settings.api_timeout + settings.loading_patience
    } else {
        settings.loading_patience
    }
}

fn has_waited(req: &HttpRequest) -> bool {
    web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(|query| query.contains_key(WAITED))
        .unwrap_or(false)
}

fn retry_url(req: &HttpRequest) -> String {
    format!("{}?{}=1", req.path(), WAITED)
}

impl<T> LoadState<T> {
    /// Waits up to `patience` for `query`. A query still in flight after that
    /// is dropped and the page is `Pending`.
    pub async fn resolve<F>(patience: Duration, query: F) -> Self
    where
        F: Future<Output = Result<T, AppError>>,
    {
        match tokio::time::timeout(patience, query).await {
            Ok(result) => result.into(),
            Err(_) => {
                info!("query still pending after {:?}", patience);
                LoadState::Pending
            }
        }
    }

    pub fn render(self, req: &HttpRequest, ready: impl FnOnce(T) -> Result<HttpResponse, AppError>) -> HttpResponse {
        let rendered = match self {
            LoadState::Pending => views::page::loading_page(&retry_url(req)).map(|markup| {
                HttpResponse::Ok()
                    .insert_header(ContentType::html())
                    .insert_header(CacheControl(vec![CacheDirective::NoStore]))
                    .body(markup)
            }),
            LoadState::Failed(err) => Err(err),
            LoadState::Ready(data) => ready(data),
        };
        rendered.unwrap_or_else(|err| err.error_response())
    }
}

impl<T> From<Result<T, AppError>> for LoadState<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(err) => LoadState::Failed(err),
        }
    }
}
