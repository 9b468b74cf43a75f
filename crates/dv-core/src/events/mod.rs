//! Event bus used to tell the UI layer about store changes and finished
//! actions

use ahash::AHashMap;
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// System-wide event bus
///
/// No lock is held while handlers run, so a handler may subscribe, publish
/// or dispatch store actions. Events published during delivery are queued
/// and delivered after the current one.
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<TypeId, Vec<Box<dyn EventHandler>>>>>,
    pending: Mutex<VecDeque<Box<dyn Event>>>,
    delivering: AtomicBool,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Events published by the store and the actions
pub mod events {
    use super::Event;
    use crate::error::LoadError;
    use crate::model::VisualizationType;

    /// The store applied one or more actions
    #[derive(Debug, Clone)]
    pub struct StateChanged {
        pub actions: Vec<&'static str>,
    }

    /// A visualization was fetched and published into the store
    #[derive(Debug, Clone)]
    pub struct VisualizationLoaded {
        pub id: String,
        pub vis_type: VisualizationType,
    }

    /// Loading or saving failed; the error is also in the loader state
    #[derive(Debug, Clone)]
    pub struct LoadFailed {
        pub error: LoadError,
    }

    /// The backend stored a visualization
    #[derive(Debug, Clone)]
    pub struct VisualizationSaved {
        pub uid: String,
        pub as_copy: bool,
    }

    #[derive(Debug, Clone)]
    pub struct VisualizationDeleted {
        pub id: String,
        pub name: String,
    }

    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(
        StateChanged,
        VisualizationLoaded,
        LoadFailed,
        VisualizationSaved,
        VisualizationDeleted
    );
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
            pending: Mutex::new(VecDeque::new()),
            delivering: AtomicBool::new(false),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let type_id = TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_default().push(handler);
    }

    /// Subscribe a closure that receives the concrete event type
    pub fn subscribe_fn<E, F>(&self, mut f: F)
    where
        E: Event,
        F: FnMut(&E) + Send + Sync + 'static,
    {
        self.subscribe::<E>(handler_from_fn(move |event: &dyn Event| {
            if let Some(event) = event.as_any().downcast_ref::<E>() {
                f(event);
            }
        }));
    }

    /// Publish an event
    ///
    /// Handlers run on the thread that is delivering. A publish made while
    /// another delivery is in progress only enqueues the event.
    pub fn publish<E: Event>(&self, event: E) {
        self.pending.lock().push_back(Box::new(event));

        loop {
            if self.delivering.swap(true, Ordering::AcqRel) {
                return;
            }

            loop {
                let next = self.pending.lock().pop_front();
                match next {
                    Some(event) => self.deliver(&*event),
                    None => break,
                }
            }

            self.delivering.store(false, Ordering::Release);

            // An event may have been queued between the last pop and the reset
            if self.pending.lock().is_empty() {
                return;
            }
        }
    }

    fn deliver(&self, event: &dyn Event) {
        let type_id = Any::type_id(event.as_any());

        let mut running = match self.handlers.lock().get_mut(&type_id) {
            Some(handlers) => std::mem::take(handlers),
            None => return,
        };

        for handler in running.iter_mut() {
            handler.handle(event);
        }

        // Handlers subscribed during delivery go after the existing ones
        let mut handlers = self.handlers.lock();
        let slot = handlers.entry(type_id).or_default();
        running.append(slot);
        *slot = running;
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}
