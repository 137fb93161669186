use actix_web::{get, post, web, HttpRequest, HttpResponse};
use log::info;

use crate::{
    config::Settings,
    dto::{FriendDto, UpdateUserDto},
    errors::AppError,
    gql::ApiClient,
    service::{self, load::{self, LoadState}, session::Session},
    views,
};

use super::{html, redirect};

#[get("/friends")]
pub async fn friends(req: HttpRequest, api: web::Data<ApiClient>, settings: web::Data<Settings>) -> Result<HttpResponse, AppError> {
    let session = Session::of(&req);
    let me = match &session.me {
        Some(me) => me,
        None => return views::login::log_in_page("Friends").map(html),
    };
    Ok(LoadState::resolve(load::patience(&req, &settings), service::user::get_friends(&api, &session))
        .await
        .render(&req, |view| views::friends::friends(me, &view).map(html)))
}

#[post("/friends/add")]
pub async fn add_friend(req: HttpRequest, form: web::Form<FriendDto>, api: web::Data<ApiClient>) -> Result<HttpResponse, AppError> {
    let session = Session::of(&req);
    let set_cookies = service::user::add_friend(&api, &session, form.into_inner()).await?;
    Ok(redirect("/friends", set_cookies))
}

#[post("/friends/remove")]
pub async fn remove_friend(req: HttpRequest, form: web::Form<FriendDto>, api: web::Data<ApiClient>) -> Result<HttpResponse, AppError> {
    let session = Session::of(&req);
    let set_cookies = service::user::remove_friend(&api, &session, form.into_inner()).await?;
    Ok(redirect("/friends", set_cookies))
}

#[get("/user")]
pub async fn user(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let markup = match Session::of(&req).me {
        Some(me) => views::user::user(&me)?,
        None => views::login::log_in_page("User")?,
    };
    Ok(html(markup))
}

#[post("/user")]
pub async fn update(req: HttpRequest, form: web::Form<UpdateUserDto>, api: web::Data<ApiClient>) -> Result<HttpResponse, AppError> {
    let session = Session::of(&req);
    let (updated, set_cookies) = service::user::update(&api, &session, form.into_inner()).await?;
    info!("updated settings for {}", updated.username);
    Ok(redirect("/user", set_cookies))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(friends)
        .service(add_friend)
        .service(remove_friend)
        .service(user)
        .service(update);
}
