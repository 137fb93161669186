use minijinja::context;

use crate::errors::AppError;

use super::render;

pub fn error_page(message: &str) -> Result<String, AppError> {
    render("error.html", context! { message })
}

/// Shown while a query is still in flight; refreshes itself to `retry`.
pub fn loading_page(retry: &str) -> Result<String, AppError> {
    render("loading.html", context! { retry })
}
