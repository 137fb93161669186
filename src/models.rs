use serde::{Deserialize, Serialize};

/// Fields selected by the `EventView` fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub username: String,
}

/// Fields selected by the `UserLogin` fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLogin {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendRef {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendsView {
    pub friends: Vec<FriendRef>,
    pub friends_outgoing: Vec<FriendRef>,
    pub friends_incoming: Vec<FriendRef>,
}
