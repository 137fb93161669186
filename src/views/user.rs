use minijinja::context;

use crate::{errors::AppError, models::UserLogin};

use super::render;

pub fn user(me: &UserLogin) -> Result<String, AppError> {
    render("user.html", context! { me })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_form_is_prefilled() {
        let me = UserLogin { username: "alice".into(), email: "a\"@example.com".into() };
        let html = user(&me).unwrap();
        assert!(html.contains("name=\"username\" value=\"alice\""));
        assert!(html.contains("value=\"a&quot;@example.com\""));
        assert!(html.contains("action=\"/user\""));
        assert!(html.contains("<title>User - Event Index</title>"));
    }
}
