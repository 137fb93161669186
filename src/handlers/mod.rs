#[cfg(test)]
macro_rules! test_app {
    ($settings:expr) => {{
        let settings: $crate::config::Settings = $settings;
        let api = $crate::gql::ApiClient::new(settings.api_url.clone(), settings.api_timeout).unwrap();
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(api.clone()))
                .app_data(actix_web::web::Data::new(settings))
                .configure($crate::handlers::config(api)),
        )
        .await
    }};
}

pub mod auth;
pub mod event;
pub mod user;

use actix_web::{
    get,
    http::header::{self, ContentType},
    web, HttpRequest, HttpResponse, ResponseError,
};
use log::warn;
use serde_json::json;

use crate::{errors::AppError, gql::ApiClient, service::session::SessionMiddleware};

pub fn html(markup: String) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(markup)
}

/// Sends the browser to `location`, handing over any cookies the events API set.
pub fn redirect(location: &str, set_cookies: Vec<String>) -> HttpResponse {
    let mut res = HttpResponse::SeeOther();
    res.insert_header((header::LOCATION, location));
    for cookie in set_cookies {
        res.append_header((header::SET_COOKIE, cookie));
    }
    res.finish()
}

#[get("/heartbeat")]
pub async fn heartbeat() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "healthy" }))
}

#[get("/calendar/{name}.ics")]
pub async fn calendar(name: web::Path<String>, api: web::Data<ApiClient>) -> Result<HttpResponse, AppError> {
    let calendar = api.calendar(&name).await?;
    Ok(HttpResponse::Ok()
        .content_type(calendar.content_type)
        .body(calendar.body))
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    AppError::not_found(format!("No page at {}", req.path())).error_response()
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req| {
        warn!("rejected form for {}: {}", req.path(), err);
        AppError::BadClientData.into()
    })
}

/// The whole route table. Pages see the session; the heartbeat and the
/// calendar export do not need one.
pub fn config(api: ApiClient) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(form_config())
            .service(heartbeat)
            .service(calendar)
            .service(
                web::scope("")
                    .wrap(SessionMiddleware { api })
                    .configure(event::init_routes)
                    .configure(user::init_routes)
                    .configure(auth::init_routes),
            )
            .default_service(web::route().to(not_found));
    }
}
