use minijinja::context;

use crate::{
    errors::AppError,
    models::{EventView, UserLogin},
};

use super::render;

pub fn event_list(me: Option<&UserLogin>, events: &[EventView]) -> Result<String, AppError> {
    render("event_list.html", context! { me, events })
}

pub fn event_view(event: &EventView) -> Result<String, AppError> {
    render("event_view.html", context! { event })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Owner;

    #[test]
    fn anonymous_list_shows_login_and_about() {
        let html = event_list(None, &[]).unwrap();
        assert!(html.contains("<h3>Log In</h3>"));
        assert!(html.contains("An Index for Events"));
        assert!(!html.contains("Logged in as"));
        assert!(html.contains("<title>Event Index</title>"));
    }

    #[test]
    fn logged_in_list_shows_user_info() {
        let me = UserLogin { username: "alice".into(), email: "a@example.com".into() };
        let html = event_list(Some(&me), &[]).unwrap();
        assert!(html.contains("Logged in as alice"));
        assert!(!html.contains("<h3>Log In</h3>"));
    }

    #[test]
    fn event_view_shows_owner() {
        let event = EventView {
            id: 3,
            title: "Picnic".into(),
            description: "Bring <food>".into(),
            tags: vec![],
            owner: Owner { username: "bob".into() },
        };
        let html = event_view(&event).unwrap();
        assert!(html.contains("<title>Picnic - Event Index</title>"));
        assert!(html.contains("<p>Bring &lt;food&gt;</p>"));
        assert!(html.contains("<p>Created by bob</p>"));
    }
}
