//! Pages that host their own sub-pages

use std::rc::{Rc, Weak};

use tracing::debug;

use super::{GenericPageModal, Navigable, PageNavigator, PageRef, PageStack};

/// A page that can display sub-pages of its own.
///
/// Concrete host pages embed a `MasterPage`, implement [`PageHost`] to expose
/// it, and get the full [`PageNavigator`] contract for free. Every change to
/// the sub-stack asks the window at the root of the hierarchy to reload; an
/// unattached host just skips that.
pub struct MasterPage {
    base: GenericPageModal,
    sub_pages: PageStack,
    /// The page embedding this host, handed to sub-pages as their parent
    this: Weak<dyn PageNavigator>,
}

impl MasterPage {
    /// Create a host for the page reachable through `this`.
    ///
    /// Build the embedding page with `Rc::new_cyclic` to obtain `this`.
    pub fn new(id: impl Into<String>, this: Weak<dyn PageNavigator>) -> Self {
        let id = id.into();
        Self {
            sub_pages: PageStack::new(id.clone()),
            base: GenericPageModal::new(id),
            this,
        }
    }

    pub fn base(&self) -> &GenericPageModal {
        &self.base
    }

    /// The stack of sub-pages
    pub fn sub_pages(&self) -> &PageStack {
        &self.sub_pages
    }

    pub fn current_page(&self) -> Option<PageRef> {
        self.sub_pages.top()
    }

    pub fn display(&self, page: PageRef) {
        if self.sub_pages.push(page, self.this.clone()) {
            self.reload_window();
        }
    }

    /// Displays `page` without asking the window to reload.
    ///
    /// For the host's own navigated-to hook, which runs inside a navigation
    /// call whose reload is still to come.
    pub fn display_without_reload(&self, page: PageRef) {
        self.sub_pages.push(page, self.this.clone());
    }

    pub fn close_current_page(&self) {
        if self.sub_pages.pop() {
            self.reload_window();
        }
    }

    pub fn close_pages_after(&self, keep_page_id: &str) {
        if self.sub_pages.pop_after(|page| page.id() == keep_page_id) {
            self.reload_window();
        }
    }

    pub fn clear_stack_and_display(&self, page: PageRef) {
        if self.sub_pages.reset_to(page, self.this.clone()) {
            self.reload_window();
        }
    }

    pub fn close_all_pages(&self) {
        if self.sub_pages.clear() {
            self.reload_window();
        }
    }

    fn reload_window(&self) {
        match self.base.parent_window() {
            Some(window) => window.reload(),
            None => debug!(host = self.base.id(), "host not in a window, skipping reload"),
        }
    }
}

impl Navigable for MasterPage {
    fn base(&self) -> &GenericPageModal {
        &self.base
    }
}

/// Access to the [`MasterPage`] embedded in a host page
pub trait PageHost {
    fn host(&self) -> &MasterPage;
}

impl PageHost for MasterPage {
    fn host(&self) -> &MasterPage {
        self
    }
}

impl<T: PageHost> PageNavigator for T {
    fn current_page(&self) -> Option<PageRef> {
        self.host().current_page()
    }

    fn display(&self, page: PageRef) {
        self.host().display(page);
    }

    fn close_current_page(&self) {
        self.host().close_current_page();
    }

    fn close_pages_after(&self, keep_page_id: &str) {
        self.host().close_pages_after(keep_page_id);
    }

    fn clear_stack_and_display(&self, page: PageRef) {
        self.host().clear_stack_and_display(page);
    }

    fn close_all_pages(&self) {
        self.host().close_all_pages();
    }

    fn parent_navigator(&self) -> Option<Rc<dyn PageNavigator>> {
        self.host().base().parent_navigator()
    }
}
