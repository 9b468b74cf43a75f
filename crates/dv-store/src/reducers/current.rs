//! The working copy being edited
//!
//! Replaced independently of the saved visualization so edits never touch
//! the persisted copy.

use std::sync::Arc;

use dv_core::Visualization;

use crate::action::Action;

pub fn reduce(state: &mut Option<Arc<Visualization>>, action: &Action) {
    match action {
        Action::SetCurrent(current) => *state = Some(current.clone()),
        Action::ClearCurrent => *state = None,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_core::VisualizationType;

    #[test]
    fn test_current_is_independent_of_visualization() {
        let saved = Arc::new(Visualization::new(VisualizationType::Bar));
        let mut visualization = None;
        let mut current = None;

        crate::reducers::visualization::reduce(
            &mut visualization,
            &Action::SetVisualization(saved.clone()),
        );
        reduce(&mut current, &Action::SetVisualization(saved.clone()));
        assert!(visualization.is_some());
        assert!(current.is_none());

        reduce(&mut current, &Action::SetCurrent(saved));
        reduce(&mut current, &Action::ClearVisualization);
        assert!(current.is_some());

        reduce(&mut current, &Action::ClearCurrent);
        assert!(current.is_none());
    }
}
