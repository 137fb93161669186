pub mod auth;
pub mod event;
pub mod load;
pub mod log;
pub mod session;
pub mod user;
