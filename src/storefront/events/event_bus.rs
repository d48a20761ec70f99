//! # Event Bus
//!
//! Observer-style distribution of model events to subscribers that live
//! outside the page (renderers, loggers, tests).

use super::model_events::ModelEvent;

/// Type alias for model event handlers to reduce complexity
pub type ModelEventHandler = Box<dyn Fn(&ModelEvent) + Send + Sync>;

/// Event bus for decoupled communication between components
pub trait EventBus: Send + Sync {
    /// Publish a model event
    fn publish_model_event(&mut self, event: ModelEvent);

    /// Subscribe to model events
    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler);
}

/// Simple in-memory event bus implementation
pub struct SimpleEventBus {
    model_handlers: Vec<ModelEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            model_handlers: Vec::new(),
        }
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for SimpleEventBus {
    fn publish_model_event(&mut self, event: ModelEvent) {
        for handler in &self.model_handlers {
            handler(&event);
        }
    }

    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler) {
        self.model_handlers.push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn event_bus_should_deliver_model_events() {
        let mut bus = SimpleEventBus::new();
        let received_events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = received_events.clone();

        bus.subscribe_to_model_events(Box::new(move |event| {
            events_clone.lock().unwrap().push(event.clone());
        }));

        let event = ModelEvent::ItemsLoaded { seq: 1, count: 4 };
        bus.publish_model_event(event.clone());

        let received = received_events.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], event);
    }

    #[test]
    fn event_bus_should_handle_multiple_subscribers() {
        let mut bus = SimpleEventBus::new();
        let counter = Arc::new(Mutex::new(0));

        for _ in 0..3 {
            let counter_clone = counter.clone();
            bus.subscribe_to_model_events(Box::new(move |_| {
                *counter_clone.lock().unwrap() += 1;
            }));
        }

        bus.publish_model_event(ModelEvent::ReloadRequested);
        assert_eq!(*counter.lock().unwrap(), 3);
    }
}
