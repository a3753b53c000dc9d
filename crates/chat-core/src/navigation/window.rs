//! Window-level navigator

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use tracing::{debug, info};

use super::{
    ModalRef, ModalStack, PageNavigator, PageRef, PageStack, ReloadSignal, WindowNavigator,
};
use crate::events::{Event, EventBus, ModalDismissed, ModalShown, NavigationChanged};

/// Id used for the window's own page stack in logs
const WINDOW_STACK_ID: &str = "window";

/// Root of the navigation hierarchy.
///
/// Owns the window's page stack and the modal overlays, and turns every
/// successful change into exactly one reload.
pub struct SimpleWindowNavigator {
    pages: PageStack,
    modals: ModalStack,
    this: Weak<SimpleWindowNavigator>,
    /// Asks the surrounding render loop for a new frame
    invalidate: Box<dyn Fn()>,
    reloads: Cell<usize>,
    /// Set while current page/modal interaction hooks are running
    refreshing: Cell<bool>,
    reload_signal: ReloadSignal,
    event_bus: Option<Arc<EventBus>>,
}

impl SimpleWindowNavigator {
    /// Create a navigator that calls `invalidate` whenever the window should redraw
    pub fn new(invalidate: impl Fn() + 'static) -> Rc<Self> {
        Self::build(Box::new(invalidate), None)
    }

    /// Like [`SimpleWindowNavigator::new`], also publishing navigation events on `event_bus`
    pub fn with_event_bus(invalidate: impl Fn() + 'static, event_bus: Arc<EventBus>) -> Rc<Self> {
        Self::build(Box::new(invalidate), Some(event_bus))
    }

    fn build(invalidate: Box<dyn Fn()>, event_bus: Option<Arc<EventBus>>) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            pages: PageStack::new(WINDOW_STACK_ID),
            modals: ModalStack::new(),
            this: this.clone(),
            invalidate,
            reloads: Cell::new(0),
            refreshing: Cell::new(false),
            reload_signal: ReloadSignal::new(),
            event_bus,
        })
    }

    fn as_parent(&self) -> Weak<dyn PageNavigator> {
        self.this.clone()
    }

    /// The window's page stack
    pub fn page_stack(&self) -> &PageStack {
        &self.pages
    }

    /// The window's modal stack
    pub fn modal_stack(&self) -> &ModalStack {
        &self.modals
    }

    /// How many reloads have been signalled so far
    pub fn reload_count(&self) -> usize {
        self.reloads.get()
    }

    /// A handle other threads can use to request a reload
    pub fn reload_signal(&self) -> ReloadSignal {
        self.reload_signal.clone()
    }

    /// Turns a pending cross-thread request into a reload. Call once per frame.
    pub fn poll_reload_signal(&self) -> bool {
        if !self.reload_signal.take() {
            return false;
        }
        debug!("reload requested from another thread");
        self.reload();
        true
    }

    /// Runs the interaction hooks of the current page and the visible modal.
    ///
    /// Called by the render loop before every layout and by [`WindowNavigator::reload`].
    /// Nested calls from inside a hook are ignored.
    pub fn handle_user_interactions(&self) {
        if self.refreshing.replace(true) {
            debug!("interaction refresh already running");
            return;
        }

        if let Some(page) = self.pages.top() {
            page.handle_user_interactions();
        }
        if let Some(modal) = self.modals.top() {
            modal.handle();
        }

        self.refreshing.set(false);
    }

    /// Dismisses every modal, top first
    pub fn dismiss_all_modals(&self) {
        let dismissed = self.modals.ids();
        if self.modals.clear() {
            for modal_id in dismissed.into_iter().rev() {
                self.publish(ModalDismissed { modal_id });
            }
            self.reload();
        }
    }

    fn pages_changed(&self) {
        self.publish(NavigationChanged {
            current_page_id: self.current_page_id(),
            depth: self.pages.len(),
        });
        self.reload();
    }

    fn publish<E: Event>(&self, event: E) {
        if let Some(event_bus) = &self.event_bus {
            event_bus.publish(event);
        }
    }
}

impl PageNavigator for SimpleWindowNavigator {
    fn current_page(&self) -> Option<PageRef> {
        self.pages.top()
    }

    fn display(&self, page: PageRef) {
        info!(page = page.id(), "displaying page");
        if self.pages.push(page, self.as_parent()) {
            self.pages_changed();
        }
    }

    fn close_current_page(&self) {
        if self.pages.pop() {
            self.pages_changed();
        }
    }

    fn close_pages_after(&self, keep_page_id: &str) {
        if self.pages.pop_after(|page| page.id() == keep_page_id) {
            self.pages_changed();
        }
    }

    fn clear_stack_and_display(&self, page: PageRef) {
        info!(page = page.id(), "clearing stack and displaying page");
        if self.pages.reset_to(page, self.as_parent()) {
            self.pages_changed();
        }
    }

    fn close_all_pages(&self) {
        if self.pages.clear() {
            info!("closed all pages");
            self.pages_changed();
        }
    }

    fn as_window(self: Rc<Self>) -> Option<Rc<dyn WindowNavigator>> {
        let window: Rc<dyn WindowNavigator> = self;
        Some(window)
    }
}

impl WindowNavigator for SimpleWindowNavigator {
    fn show_modal(&self, modal: ModalRef) {
        let modal_id = modal.id().to_string();
        if self.modals.show(modal, self.as_parent()) {
            self.publish(ModalShown { modal_id });
            self.reload();
        }
    }

    fn dismiss_modal(&self, modal_id: &str) {
        if self.modals.dismiss(modal_id) {
            self.publish(ModalDismissed {
                modal_id: modal_id.to_string(),
            });
            self.reload();
        }
    }

    fn top_modal(&self) -> Option<ModalRef> {
        self.modals.top()
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
        debug!(count = self.reloads.get(), "reloading window");
        (self.invalidate)();
        self.handle_user_interactions();
    }
}
