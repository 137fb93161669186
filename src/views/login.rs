use minijinja::context;

use crate::errors::AppError;

use super::render;

/// A page that only holds the login prompt, for pages that need a user.
pub fn log_in_page(title: &str) -> Result<String, AppError> {
    render("login_page.html", context! { title })
}
