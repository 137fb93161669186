//! HTML views. Markup lives in `templates/`; every function here is pure:
//! data in, rendered page out.

pub mod event;
pub mod friends;
pub mod login;
pub mod page;
pub mod user;

use std::sync::OnceLock;

use log::error;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::errors::AppError;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("templates/base.html")),
    ("about.html", include_str!("templates/about.html")),
    ("tag.html", include_str!("templates/tag.html")),
    ("tag_list.html", include_str!("templates/tag_list.html")),
    ("calendar.html", include_str!("templates/calendar.html")),
    ("login.html", include_str!("templates/login.html")),
    ("user_info.html", include_str!("templates/user_info.html")),
    ("event_list.html", include_str!("templates/event_list.html")),
    ("event_view.html", include_str!("templates/event_view.html")),
    ("friends.html", include_str!("templates/friends.html")),
    ("user.html", include_str!("templates/user.html")),
    ("login_page.html", include_str!("templates/login_page.html")),
    ("error.html", include_str!("templates/error.html")),
    ("loading.html", include_str!("templates/loading.html")),
];

static ENVIRONMENT: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENVIRONMENT.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        for (name, source) in TEMPLATES {
            // A broken template surfaces as a render error on first use.
            if let Err(err) = env.add_template(name, source) {
                error!("template {} failed to compile: {}", name, err);
            }
        }
        env
    })
}

/// Renders the named template with every interpolation HTML-escaped.
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, AppError> {
    environment()
        .get_template(name)
        .and_then(|template| template.render(ctx))
        .map_err(|err| {
            error!("[{:} : {:}] rendering {} failed: {}", file!(), line!(), name, err);
            AppError::Render { message: err.to_string() }
        })
}
