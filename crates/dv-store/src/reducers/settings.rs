use dv_core::Settings;

use crate::action::Action;

pub fn reduce(state: &mut Settings, action: &Action) {
    if let Action::ReceivedSettings(settings) = action {
        *state = settings.clone();
    }
}
