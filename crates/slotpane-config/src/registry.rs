#![forbid(unsafe_code)]

//! Named callbacks referenced from pane documents.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use slotpane_core::event::ClickEvent;
use slotpane_layout::{ClickAction, Pane};

/// Fills a freshly loaded pane from host code (`populate="name"`).
pub type Populator<T> = Arc<dyn Fn(&mut Pane<T>) + Send + Sync>;

/// Lookup table from names used in documents to host callbacks.
pub struct CallbackRegistry<T> {
    actions: HashMap<String, ClickAction<T>>,
    populators: HashMap<String, Populator<T>>,
}

impl<T> CallbackRegistry<T> {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            populators: HashMap::new(),
        }
    }

    /// Register a click callback for `onClick="name"`.
    ///
    /// Re-registering a name replaces the previous callback.
    pub fn register_action(
        &mut self,
        name: impl Into<String>,
        action: impl Fn(&mut ClickEvent<T>) + Send + Sync + 'static,
    ) -> &mut Self {
        self.actions.insert(name.into(), Arc::new(action));
        self
    }

    /// Register a populator for `populate="name"`.
    pub fn register_populator(
        &mut self,
        name: impl Into<String>,
        populator: impl Fn(&mut Pane<T>) + Send + Sync + 'static,
    ) -> &mut Self {
        self.populators.insert(name.into(), Arc::new(populator));
        self
    }

    pub fn action(&self, name: &str) -> Option<ClickAction<T>> {
        self.actions.get(name).cloned()
    }

    pub fn populator(&self, name: &str) -> Option<&Populator<T>> {
        self.populators.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.populators.is_empty()
    }
}

impl<T> Default for CallbackRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CallbackRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut actions: Vec<_> = self.actions.keys().collect();
        let mut populators: Vec<_> = self.populators.keys().collect();
        actions.sort();
        populators.sort();
        f.debug_struct("CallbackRegistry")
            .field("actions", &actions)
            .field("populators", &populators)
            .finish()
    }
}
