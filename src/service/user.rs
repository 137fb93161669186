use crate::{
    dto::{FriendDto, NoVariables, UpdateUserDto},
    errors::AppError,
    gql::{documents::{AddFriend, GetFriends, RemoveFriend, UpdateUser}, ApiClient},
    models::{FriendsView, UserLogin},
};

use super::session::Session;

pub async fn get_friends(api: &ApiClient, session: &Session) -> Result<FriendsView, AppError> {
    let res = api.execute::<GetFriends>(session.cookie(), &NoVariables {})
        .await?;
    // The session can expire between the session lookup and this query.
    res.data.me.ok_or(AppError::Unauthorized)
}

pub async fn add_friend(api: &ApiClient, session: &Session, dto: FriendDto) -> Result<Vec<String>, AppError> {
    let res = api.execute::<AddFriend>(session.cookie(), &dto)
        .await?;
    Ok(res.set_cookies)
}

pub async fn remove_friend(api: &ApiClient, session: &Session, dto: FriendDto) -> Result<Vec<String>, AppError> {
    let res = api.execute::<RemoveFriend>(session.cookie(), &dto)
        .await?;
    Ok(res.set_cookies)
}

pub async fn update(api: &ApiClient, session: &Session, dto: UpdateUserDto) -> Result<(UserLogin, Vec<String>), AppError> {
    let res = api.execute::<UpdateUser>(session.cookie(), &dto)
        .await?;
    Ok((res.data.update_user, res.set_cookies))
}
