use std::{
    future::{ready, Ready},
    io::Write,
    time::Instant,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use colored::Colorize;
use env_logger::{Builder, Env};
use futures_util::future::LocalBoxFuture;
use log::{info, warn, Level};

pub struct LoggerMiddleware;

impl<S, B> Transform<S, ServiceRequest> for LoggerMiddleware
where
   S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
   S::Future: 'static,
   B: 'static,
{
   type Response = ServiceResponse<B>;
   type Error = Error;
   type InitError = ();
   type Transform = LoggerMiddlewareService<S>;
   type Future = Ready<Result<Self::Transform, Self::InitError>>;

   fn new_transform(&self, service: S) -> Self::Future {
      ready(Ok(LoggerMiddlewareService { service }))
   }
}

pub struct LoggerMiddlewareService<S> {
   service: S
}

impl<S, B> Service<ServiceRequest> for LoggerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
   type Response = ServiceResponse<B>;
   type Error = Error;
   type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

   forward_ready!(service);

   fn call(&self, req: ServiceRequest) -> Self::Future {
      let started = Instant::now();
      let line = format!("{} {}", req.method(), req.uri());
      let fut = self.service.call(req);

      Box::pin(async move {
         let res = fut.await?;
         let status = res.status();
         if status.is_server_error() {
            warn!("{} -> {} in {:?}", line, status, started.elapsed());
         } else {
            info!("{} -> {} in {:?}", line, status, started.elapsed());
         }
         Ok(res)
      })
   }
}

/// Logs at `info` unless `RUST_LOG` says otherwise.
pub fn init_logger() {
   Builder::from_env(Env::default().default_filter_or("info"))
   .format(|buf, record| {
      let level = match record.level() {
         Level::Error => "ERROR".red().bold(),
         Level::Warn => "WARN".yellow().bold(),
         Level::Info => "INFO".green().bold(),
         Level::Debug => "DEBUG".blue().bold(),
         Level::Trace => "TRACE".magenta().bold(),
      };
      writeln!(buf, "{} {} - {}", level, record.target().dimmed(), record.args())
   })
   .init()
}
