//! Every GraphQL document the frontend knows about, keyed by its literal
//! source text, together with the typed operations built on top of them.

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    dto::{
        AddFriendData, CreateUserData, FriendDto, GetEventData, GetEventVariables, GetEventsData,
        GetFriendsData, GetMeData, LoginData, LoginDto, LogoutData, NewUserDto, NoVariables,
        RemoveFriendData, UpdateUserData, UpdateUserDto,
    },
    errors::AppError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Query,
    Mutation,
    Fragment,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Document {
    pub name: &'static str,
    pub kind: DocumentKind,
    pub source: &'static str,
    /// Fragments spread directly by this document.
    pub fragments: &'static [&'static Document],
}

impl Document {
    /// Text sent over the wire: the document followed by every fragment it
    /// depends on, each exactly once.
    pub fn query_text(&self) -> String {
        let mut seen: Vec<&'static str> = Vec::new();
        let mut text = String::from(self.source);
        self.append_fragments(&mut seen, &mut text);
        text
    }

    fn append_fragments(&self, seen: &mut Vec<&'static str>, text: &mut String) {
        for fragment in self.fragments {
            if seen.contains(&fragment.name) {
                continue;
            }
            seen.push(fragment.name);
            text.push_str(fragment.source);
            fragment.append_fragments(seen, text);
        }
    }
}

pub const EVENT_VIEW_FRAGMENT: Document = Document {
    name: "EventView",
    kind: DocumentKind::Fragment,
    source: "
    fragment EventView on Event {
        id
        title
        description
        tags
        owner {
            username
        }
    }
",
    fragments: &[],
};

pub const USER_LOGIN_FRAGMENT: Document = Document {
    name: "UserLogin",
    kind: DocumentKind::Fragment,
    source: "
    fragment UserLogin on User {
        username
        email
    }
",
    fragments: &[],
};

pub const GET_EVENTS: Document = Document {
    name: "getEvents",
    kind: DocumentKind::Query,
    source: "
    query getEvents {
        events {
            ...EventView
        }
    }
",
    fragments: &[&EVENT_VIEW_FRAGMENT],
};

pub const GET_EVENT: Document = Document {
    name: "getEvent",
    kind: DocumentKind::Query,
    source: "
    query getEvent($eventId: Int!) {
        event(eventId: $eventId) {
            ...EventView
        }
    }
",
    fragments: &[&EVENT_VIEW_FRAGMENT],
};

pub const GET_FRIENDS: Document = Document {
    name: "getFriends",
    kind: DocumentKind::Query,
    source: "
    query getFriends {
        me: user {
            friends {
                username
            }
            friendsOutgoing {
                username
            }
            friendsIncoming {
                username
            }
        }
    }
",
    fragments: &[],
};

pub const ADD_FRIEND: Document = Document {
    name: "addFriend",
    kind: DocumentKind::Mutation,
    source: "
    mutation addFriend($username: String!) {
        addFriend(username: $username)
    }
",
    fragments: &[],
};

pub const REMOVE_FRIEND: Document = Document {
    name: "removeFriend",
    kind: DocumentKind::Mutation,
    source: "
    mutation removeFriend($username: String!) {
        removeFriend(username: $username)
    }
",
    fragments: &[],
};

pub const GET_ME: Document = Document {
    name: "getMe",
    kind: DocumentKind::Query,
    source: "
    query getMe {
        me: user {
            ...UserLogin
        }
    }
",
    fragments: &[&USER_LOGIN_FRAGMENT],
};

pub const CREATE_USER: Document = Document {
    name: "createUser",
    kind: DocumentKind::Mutation,
    source: "
    mutation createUser(
        $username: String!
        $password1: String!
        $password2: String!
        $email: String!
    ) {
        createUser(
            username: $username
            password1: $password1
            password2: $password2
            email: $email
        ) {
            ...UserLogin
        }
    }
",
    fragments: &[&USER_LOGIN_FRAGMENT],
};

pub const UPDATE_USER: Document = Document {
    name: "updateUser",
    kind: DocumentKind::Mutation,
    source: "
    mutation updateUser(
        $password: String!
        $username: String!
        $password1: String!
        $password2: String!
        $email: String!
    ) {
        updateUser(
            password: $password
            username: $username
            password1: $password1
            password2: $password2
            email: $email
        ) {
            ...UserLogin
        }
    }
",
    fragments: &[&USER_LOGIN_FRAGMENT],
};

pub const LOGIN: Document = Document {
    name: "login",
    kind: DocumentKind::Mutation,
    source: "
    mutation login($username: String!, $password: String!) {
        login(username: $username, password: $password) {
            ...UserLogin
        }
    }
",
    fragments: &[&USER_LOGIN_FRAGMENT],
};

pub const LOGOUT: Document = Document {
    name: "logout",
    kind: DocumentKind::Mutation,
    source: "
    mutation logout {
        logout
    }
",
    fragments: &[],
};

static DOCUMENTS: [&Document; 12] = [
    &UPDATE_USER,
    &GET_EVENTS,
    &EVENT_VIEW_FRAGMENT,
    &GET_EVENT,
    &GET_FRIENDS,
    &ADD_FRIEND,
    &REMOVE_FRIEND,
    &USER_LOGIN_FRAGMENT,
    &GET_ME,
    &CREATE_USER,
    &LOGIN,
    &LOGOUT,
];

/// Looks up the document whose literal source text is `source`.
///
/// Unknown text is an error rather than an empty document, so a stale
/// query string surfaces at the call site instead of as a malformed request.
pub fn graphql(source: &str) -> Result<&'static Document, AppError> {
    DOCUMENTS
        .iter()
        .copied()
        .find(|doc| doc.source == source)
        .ok_or(AppError::UnknownDocument)
}

/// An executable document bound to the shapes of its variables and response.
pub trait Operation {
    type Variables: Serialize;
    type ResponseData: DeserializeOwned;

    /// Literal source text, resolved through the registry on use.
    const SOURCE: &'static str;

    fn document() -> Result<&'static Document, AppError> {
        graphql(Self::SOURCE)
    }
}

macro_rules! operation {
    ($ty:ident, $doc:ident, $vars:ty, $data:ty) => {
        pub struct $ty;

        impl Operation for $ty {
            type Variables = $vars;
            type ResponseData = $data;

            const SOURCE: &'static str = $doc.source;
        }
    };
}

operation!(GetEvents, GET_EVENTS, NoVariables, GetEventsData);
operation!(GetEvent, GET_EVENT, GetEventVariables, GetEventData);
operation!(GetFriends, GET_FRIENDS, NoVariables, GetFriendsData);
operation!(AddFriend, ADD_FRIEND, FriendDto, AddFriendData);
operation!(RemoveFriend, REMOVE_FRIEND, FriendDto, RemoveFriendData);
operation!(GetMe, GET_ME, NoVariables, GetMeData);
operation!(CreateUser, CREATE_USER, NewUserDto, CreateUserData);
operation!(UpdateUser, UPDATE_USER, UpdateUserDto, UpdateUserData);
operation!(Login, LOGIN, LoginDto, LoginData);
operation!(Logout, LOGOUT, NoVariables, LogoutData);
