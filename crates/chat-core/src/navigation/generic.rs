//! Shared page/modal state

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::warn;

use super::{PageNavigator, WindowNavigator};

/// Upper bound on the parent chain walked by [`resolve_window`]
const MAX_NAVIGATOR_DEPTH: usize = 64;

/// Identity plus a non-owning reference to the navigator displaying the entity.
///
/// Concrete pages and modals embed one of these and return it from
/// [`Navigable::base`](super::Navigable::base).
pub struct GenericPageModal {
    id: String,
    parent_nav: RefCell<Option<Weak<dyn PageNavigator>>>,
    closed: Cell<bool>,
}

impl GenericPageModal {
    /// Create a new base with a fixed id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_nav: RefCell::new(None),
            closed: Cell::new(false),
        }
    }

    /// The id assigned at construction
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Records `navigator` as the parent. Last writer wins.
    pub fn attach(&self, navigator: Weak<dyn PageNavigator>) {
        *self.parent_nav.borrow_mut() = Some(navigator);
    }

    /// Forgets the parent navigator
    pub fn detach(&self) {
        self.parent_nav.borrow_mut().take();
    }

    /// The navigator currently displaying this entity.
    ///
    /// Absent if never attached, detached by a full reset, or if the
    /// navigator has since been dropped.
    pub fn parent_navigator(&self) -> Option<Rc<dyn PageNavigator>> {
        self.parent_nav.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// The window navigator at the root of this entity's parent chain
    pub fn parent_window(&self) -> Option<Rc<dyn WindowNavigator>> {
        resolve_window(self.parent_navigator())
    }

    /// Whether the close notification has already been delivered
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Returns true the first time only
    pub(crate) fn mark_closed(&self) -> bool {
        !self.closed.replace(true)
    }
}

impl fmt::Debug for GenericPageModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericPageModal")
            .field("id", &self.id)
            .field("attached", &self.parent_navigator().is_some())
            .field("closed", &self.closed.get())
            .finish()
    }
}

/// Walks up from `navigator` until a window navigator is found.
///
/// Returns `None` when the chain ends, when a link has been dropped, or when
/// the chain is implausibly deep (a navigator attached to its own descendant).
pub fn resolve_window(
    navigator: Option<Rc<dyn PageNavigator>>,
) -> Option<Rc<dyn WindowNavigator>> {
    let mut current = navigator;
    for _ in 0..MAX_NAVIGATOR_DEPTH {
        let navigator = current?;
        if let Some(window) = Rc::clone(&navigator).as_window() {
            return Some(window);
        }
        current = navigator.parent_navigator();
    }

    warn!(
        depth = MAX_NAVIGATOR_DEPTH,
        "navigator chain too deep, giving up on window lookup"
    );
    None
}
