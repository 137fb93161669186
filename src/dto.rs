use serde::{Deserialize, Serialize};

use crate::models::{EventView, FriendsView, UserLogin};

// Variables

#[derive(Debug, Clone, Default, Serialize)]
pub struct NoVariables {}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEventVariables {
    pub event_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendDto {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserDto {
    pub username: String,
    pub password1: String,
    pub password2: String,
    pub email: String,
}

/// Current `password` authorises the change; empty fields are left untouched
/// by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub password: String,
    pub username: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
    #[serde(default)]
    pub email: String,
}

// Response data

#[derive(Debug, Clone, Deserialize)]
pub struct GetEventsData {
    pub events: Vec<EventView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetEventData {
    pub event: Option<EventView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetFriendsData {
    pub me: Option<FriendsView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetMeData {
    pub me: Option<UserLogin>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFriendData {
    #[serde(default)]
    pub add_friend: Option<()>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFriendData {
    #[serde(default)]
    pub remove_friend: Option<()>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserData {
    pub create_user: Option<UserLogin>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserData {
    pub update_user: UserLogin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub login: Option<UserLogin>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogoutData {
    #[serde(default)]
    pub logout: Option<()>,
}

// Wire envelope

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest<'a, V> {
    pub query: String,
    pub operation_name: &'a str,
    pub variables: &'a V,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}
