//! The last-saved visualization

use std::sync::Arc;

use dv_core::Visualization;

use crate::action::Action;

pub fn reduce(state: &mut Option<Arc<Visualization>>, action: &Action) {
    match action {
        Action::SetVisualization(visualization) => *state = Some(visualization.clone()),
        Action::ClearVisualization => *state = None,
        _ => {}
    }
}
