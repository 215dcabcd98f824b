use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::{AccordionEvent, EventKind};

/// A listener registered with [`EventEmitter::on`].
pub type Listener = Arc<dyn Fn(AccordionEvent) + Send + Sync>;

/// A minimal publish/subscribe hub keyed by [`EventKind`].
///
/// Listeners run synchronously, in registration order, on the thread that emits.
#[derive(Clone, Default)]
pub struct EventEmitter {
    listeners: Vec<(EventKind, Listener)>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl Fn(AccordionEvent) + Send + Sync + 'static,
    ) {
        self.listeners.push((kind, Arc::new(listener)));
    }

    /// Removes every listener registered for `kind`.
    pub fn off(&mut self, kind: EventKind) {
        self.listeners.retain(|(k, _)| *k != kind);
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.iter().filter(|(k, _)| *k == kind).count()
    }

    pub fn emit(&self, event: AccordionEvent) {
        let kind = event.kind();
        atrace!(?event, "emit");
        for (k, listener) in &self.listeners {
            if *k == kind {
                listener(event);
            }
        }
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for (kind, _) in &self.listeners {
            list.entry(kind);
        }
        list.finish()
    }
}
