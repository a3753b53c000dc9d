use std::sync::Arc;
use parking_lot::Mutex;
use ahash::AHashMap;

/// Navigation event bus
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

/// The window's page stack changed
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationChanged {
    /// Id of the page now on top, empty when the stack is empty
    pub current_page_id: String,
    /// Number of pages on the window's stack
    pub depth: usize,
}

/// A modal was shown on the window
#[derive(Debug, Clone, PartialEq)]
pub struct ModalShown {
    pub modal_id: String,
}

/// A modal was dismissed from the window
#[derive(Debug, Clone, PartialEq)]
pub struct ModalDismissed {
    pub modal_id: String,
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

impl_event!(NavigationChanged, ModalShown, ModalDismissed);

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

    /// Publish an event.
    ///
    /// Handlers run with the bus locked and must not publish themselves.
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }

    /// Number of handlers registered for `E`
    pub fn handler_count<E: Event>(&self) -> usize {
        self.handlers
            .lock()
            .get(&std::any::TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapter turning a closure into an [`EventHandler`]
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

/// Create an event handler that only sees events of type `E`
pub fn typed_handler<E, F>(mut f: F) -> Box<dyn EventHandler>
where
    E: Event,
    F: FnMut(&E) + Send + Sync + 'static,
{
    handler_from_fn(move |event| {
        if let Some(event) = event.as_any().downcast_ref::<E>() {
            f(event);
        }
    })
}
