use actix_web::{get, http::header, web, HttpRequest, HttpResponse};

use crate::{
   config::Settings,
   gql::ApiClient,
   service::{self, load::{self, LoadState}, session::Session},
   views,
};

use super::html;

#[get("/")]
pub async fn event_list(req: HttpRequest, api: web::Data<ApiClient>, settings: web::Data<Settings>) -> HttpResponse {
   let session = Session::of(&req);
   LoadState::resolve(load::patience(&req, &settings), service::event::get_all(&api, &session))
      .await
      .render(&req, |events| views::event::event_list(session.me.as_ref(), &events).map(html))
}

#[get("/event/{event_id}")]
pub async fn event_view(
   req: HttpRequest,
   event_id: web::Path<String>,
   api: web::Data<ApiClient>,
   settings: web::Data<Settings>
) -> HttpResponse {
   let session = Session::of(&req);
   if !session.is_authenticated() {
      return HttpResponse::Found()
         .insert_header((header::LOCATION, "/"))
         .finish();
   }
   LoadState::resolve(load::patience(&req, &settings), service::event::get_by_id(&api, &session, &event_id))
      .await
      .render(&req, |event| views::event::event_view(&event).map(html))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
   cfg.service(event_list);
   cfg.service(event_view);
}
