use actix_web::{post, web, HttpRequest, HttpResponse};
use log::error;

use crate::{
    dto::{LoginDto, NewUserDto},
    errors::AppError,
    gql::ApiClient,
    service::{self, session::Session},
};

use super::redirect;

#[post("/login")]
pub async fn login(req: HttpRequest, form: web::Form<LoginDto>, api: web::Data<ApiClient>) -> Result<HttpResponse, AppError> {
    let session = Session::of(&req);
    let set_cookies = service::auth::login(&api, &session, form.into_inner()).await?;
    Ok(redirect("/", set_cookies))
}

#[post("/logout")]
pub async fn logout(req: HttpRequest, api: web::Data<ApiClient>) -> Result<HttpResponse, AppError> {
    let session = Session::of(&req);
    let set_cookies = service::auth::logout(&api, &session)
        .await
        .map_err(|err| {
            error!("[{:} : {:}] logout failed: {:?}", file!(), line!(), err);
            err
        })?;
    Ok(redirect("/", set_cookies))
}

#[post("/register")]
pub async fn register(req: HttpRequest, form: web::Form<NewUserDto>, api: web::Data<ApiClient>) -> Result<HttpResponse, AppError> {
    let session = Session::of(&req);
    let set_cookies = service::auth::register(&api, &session, form.into_inner()).await?;
    Ok(redirect("/", set_cookies))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login)
        .service(logout)
        .service(register);
}
