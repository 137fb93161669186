use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use log::{debug, warn};

use crate::{gql::ApiClient, models::UserLogin};

/// Who is making the current request, resolved once before any page runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub me: Option<UserLogin>,
    /// The browser's `Cookie` header, forwarded verbatim to the events API.
    pub cookie: Option<String>,
}

impl Session {
    pub fn of(req: &HttpRequest) -> Session {
        req.extensions().get::<Session>().cloned().unwrap_or_default()
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.me.is_some()
    }
}

pub struct SessionMiddleware {
    pub api: ApiClient,
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            api: self.api.clone(),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
    api: ApiClient,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let api = self.api.clone();
        let cookie = req
            .headers()
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Box::pin(async move {
            // Without a cookie the events API cannot know us either.
            let me = match cookie.as_deref() {
                Some(cookie) => match api.me(Some(cookie)).await {
                    Ok(me) => me,
                    Err(err) => {
                        warn!("session lookup failed, continuing anonymously: {}", err);
                        None
                    }
                },
                None => None,
            };
            debug!(
                "session for {}: {}",
                req.path(),
                me.as_ref().map_or("anonymous", |me| me.username.as_str())
            );
            req.extensions_mut().insert(Session { me, cookie });
            service.call(req).await
        })
    }
}
