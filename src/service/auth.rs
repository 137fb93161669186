use log::info;

use crate::{
    dto::{LoginDto, NewUserDto, NoVariables},
    errors::AppError,
    gql::{documents::{CreateUser, Login, Logout}, ApiClient},
};

use super::session::Session;

/// Cookies the browser must store to hold the new session.
pub type SetCookies = Vec<String>;

pub async fn login(api: &ApiClient, session: &Session, dto: LoginDto) -> Result<SetCookies, AppError> {
    let res = api.execute::<Login>(session.cookie(), &dto)
        .await?;
    match res.data.login {
        Some(user) => {
            info!("logged in as {}", user.username);
            Ok(res.set_cookies)
        },
        None => Err(AppError::Api { message: "User not found".to_string() })
    }
}

pub async fn logout(api: &ApiClient, session: &Session) -> Result<SetCookies, AppError> {
    let res = api.execute::<Logout>(session.cookie(), &NoVariables {})
        .await?;
    Ok(res.set_cookies)
}

pub async fn register(api: &ApiClient, session: &Session, dto: NewUserDto) -> Result<SetCookies, AppError> {
    let res = api.execute::<CreateUser>(session.cookie(), &dto)
        .await?;
    if let Some(user) = &res.data.create_user {
        info!("created user {}", user.username);
    }
    Ok(res.set_cookies)
}
