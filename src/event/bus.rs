use std::cell::RefCell;

use crate::event::{EventHandler, WorkflowEvent};

/// Synchronous, single-threaded fan-out of workflow events.
///
/// Handlers run inside [`EventBus::emit`] in subscription order. A handler that emits
/// on the same bus while handling is refused instead of panicking.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.handlers.try_borrow().map(|h| h.len()).ok();
        f.debug_struct("EventBus")
            .field("handlers", &count)
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Delivers `event` to every handler. Returns false if the bus was already dispatching.
    pub fn emit(&self, event: WorkflowEvent) -> bool {
        let Ok(mut handlers) = self.handlers.try_borrow_mut() else {
            log::error!("Dropped re-entrant event {:?}", event);
            return false;
        };
        for handler in handlers.iter_mut() {
            handler.handle_event(&event);
        }
        true
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::SlotKind;
    use std::rc::Rc;

    struct Counter(Rc<RefCell<usize>>);

    impl EventHandler for Counter {
        fn handle_event(&mut self, _event: &WorkflowEvent) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_emit_reaches_every_handler() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(0));
        bus.subscribe(Box::new(Counter(seen.clone())));
        bus.subscribe(Box::new(Counter(seen.clone())));

        assert!(bus.emit(WorkflowEvent::DraftCleared(SlotKind::Script)));
        assert_eq!(*seen.borrow(), 2);
        assert_eq!(bus.handler_count(), 2);
    }

    #[test]
    fn test_reentrant_emit_is_refused() {
        let bus = EventBus::new();
        let _dispatching = bus.handlers.borrow_mut();

        assert!(!bus.emit(WorkflowEvent::DraftCleared(SlotKind::Document)));
    }
}
