use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::Mutex;

/// System-wide event bus
///
/// Mode changes, registrations and removals are published here so the
/// rendering collaborator can invalidate caches without polling the store.
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<std::any::TypeId, Vec<Box<dyn EventHandler>>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Domain events published by the store and the registry
pub mod events {
    use super::Event;
    use crate::mode::ThematicMode;
    use crate::state::MapViewState;

    /// The selected thematic mode changed.
    ///
    /// Any fill-color result cached per feature is invalid once this fires;
    /// the renderer keys its caches on the mode token for the same reason.
    #[derive(Debug, Clone)]
    pub struct ModeChanged {
        pub previous: ThematicMode,
        pub current: ThematicMode,
    }

    /// A source descriptor was registered
    #[derive(Debug, Clone)]
    pub struct SourceAdded {
        pub id: String,
    }

    /// A source descriptor was removed
    #[derive(Debug, Clone)]
    pub struct SourceRemoved {
        pub id: String,
    }

    /// A layer binding was registered
    #[derive(Debug, Clone)]
    pub struct LayerAdded {
        pub id: String,
        pub source: String,
    }

    /// A layer binding was removed
    #[derive(Debug, Clone)]
    pub struct LayerRemoved {
        pub id: String,
    }

    /// The camera moved; reported back by the rendering collaborator
    #[derive(Debug, Clone)]
    pub struct ViewStateChanged {
        pub view_state: MapViewState,
    }

    // Implement Event trait for all event types
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
        ModeChanged,
        SourceAdded,
        SourceRemoved,
        LayerAdded,
        LayerRemoved,
        ViewStateChanged
    );
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_insert_with(Vec::new).push(handler);
    }

    /// Publish an event to its subscribers
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
struct ClosureEventHandler<F> {
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

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::events::{ModeChanged, SourceAdded};
    use super::*;
    use crate::mode::ThematicMode;

    #[test]
    fn publish_reaches_subscribers_of_the_event_type() {
        let bus = EventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = seen.clone();
        bus.subscribe::<ModeChanged>(handler_from_fn(move |event| {
            let change = event
                .as_any()
                .downcast_ref::<ModeChanged>()
                .expect("wrong event type delivered");
            assert_eq!(change.current, ThematicMode::CurrentUse);
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        bus.publish(ModeChanged {
            previous: ThematicMode::ConstructionDate,
            current: ThematicMode::CurrentUse,
        });
        // Unrelated events do not reach the handler
        bus.publish(SourceAdded {
            id: "buildingsSource".to_string(),
        });

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
