use minijinja::context;

use crate::{
    errors::AppError,
    models::{FriendsView, UserLogin},
};

use super::render;

pub fn friends(me: &UserLogin, view: &FriendsView) -> Result<String, AppError> {
    render("friends.html", context! { me, view })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FriendRef;

    fn refs(names: &[&str]) -> Vec<FriendRef> {
        names.iter().map(|n| FriendRef { username: n.to_string() }).collect()
    }

    #[test]
    fn lists_each_relationship_with_its_actions() {
        let me = UserLogin { username: "alice".into(), email: String::new() };
        let view = FriendsView {
            friends: refs(&["bob"]),
            friends_outgoing: refs(&["carol"]),
            friends_incoming: refs(&["dave"]),
        };
        let html = friends(&me, &view).unwrap();
        assert!(html.contains("<li>bob<form method=\"post\" action=\"/friends/remove\">"));
        assert!(html.contains("<li>dave<form method=\"post\" action=\"/friends/add\">"));
        assert!(html.contains("value=\"dave\"><button type=\"submit\">Reject</button>"));
        assert!(html.contains("value=\"carol\"><button type=\"submit\">Cancel</button>"));
        assert!(html.contains("Logged in as alice"));
    }

    #[test]
    fn empty_lists_say_none() {
        let me = UserLogin { username: "alice".into(), email: String::new() };
        let html = friends(&me, &FriendsView::default()).unwrap();
        assert_eq!(html.matches("<li>None</li>").count(), 3);
    }

    #[test]
    fn usernames_are_escaped_in_hidden_fields() {
        let me = UserLogin { username: "alice".into(), email: String::new() };
        let view = FriendsView { friends: refs(&["\"bob\""]), ..Default::default() };
        let html = friends(&me, &view).unwrap();
        assert!(html.contains("value=\"&quot;bob&quot;\""));
    }
}
