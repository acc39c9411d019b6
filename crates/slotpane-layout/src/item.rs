#![forbid(unsafe_code)]

//! Item entries held by panes.

use std::fmt;
use std::sync::Arc;

use slotpane_core::event::ClickEvent;

/// Callback bound to an item, invoked when a click resolves to it.
pub type ClickAction<T> = Arc<dyn Fn(&mut ClickEvent<T>) + Send + Sync>;

/// One entry of a pane's item list.
///
/// `item` is the rendered representation written into the container and
/// compared against the payload of incoming clicks. Hidden entries keep
/// their place in the fill order but are never rendered or claimed.
#[derive(Clone)]
pub struct PaneItem<T> {
    item: T,
    visible: bool,
    action: Option<ClickAction<T>>,
}

impl<T> PaneItem<T> {
    /// A visible item with no callback.
    pub fn new(item: T) -> Self {
        Self {
            item,
            visible: true,
            action: None,
        }
    }

    /// A hidden placeholder occupying one position.
    pub fn hidden(item: T) -> Self {
        Self {
            item,
            visible: false,
            action: None,
        }
    }

    /// Bind a click callback.
    #[must_use]
    pub fn with_action(mut self, action: impl Fn(&mut ClickEvent<T>) + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Replace the click callback.
    pub fn set_action(&mut self, action: Option<ClickAction<T>>) {
        self.action = action;
    }

    /// The bound callback, if any.
    pub fn action(&self) -> Option<&ClickAction<T>> {
        self.action.as_ref()
    }

    /// The rendered representation.
    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Run the bound callback, if any.
    pub fn invoke(&self, event: &mut ClickEvent<T>) {
        if let Some(action) = &self.action {
            action(event);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PaneItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneItem")
            .field("item", &self.item)
            .field("visible", &self.visible)
            .field("action", &self.action.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
