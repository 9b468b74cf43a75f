//! Navigation subscriber trait

use super::Location;

/// Trait for components that need to respond to navigation changes
pub trait NavigationSubscriber: Send + Sync {
    /// Called after an entry was pushed or replaced
    fn on_location_change(&self, location: &Location);
}
