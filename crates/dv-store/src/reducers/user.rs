//! The signed-in user, set once per session

use dv_core::User;

use crate::action::Action;

pub fn reduce(state: &mut User, action: &Action) {
    if let Action::ReceivedUser(external) = action {
        *state = User::from(external);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_core::user::ExternalUser;

    #[test]
    fn test_received_user() {
        let mut state = User::default();
        let mut external = ExternalUser {
            id: "u1".to_string(),
            username: "admin".to_string(),
            ..Default::default()
        };
        external.settings.key_ui_locale = "en".to_string();
        external.authorities.insert("ALL".to_string());

        reduce(&mut state, &Action::ReceivedUser(external));

        assert_eq!(
            state,
            User {
                id: "u1".to_string(),
                username: "admin".to_string(),
                ui_locale: "en".to_string(),
                is_superuser: true,
            }
        );
    }
}
