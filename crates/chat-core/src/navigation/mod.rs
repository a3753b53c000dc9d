//! Navigation contracts
//!
//! Pages and modals are driven through a small set of lifecycle hooks by
//! whichever navigator is currently showing them. Navigators form a tree:
//! the window navigator sits at the root and any page that hosts its own
//! page stack (see [`MasterPage`]) can sit anywhere below it.
//!
//! Everything here runs on the UI thread. Handles are `Rc` based and every
//! hook takes `&self`, so pages keep their own state behind `Cell`/`RefCell`
//! and may call back into their navigator from inside a hook.

use std::rc::{Rc, Weak};

mod generic;
mod master;
mod signal;
mod stack;
mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use generic::{resolve_window, GenericPageModal};
pub use master::{MasterPage, PageHost};
pub use signal::ReloadSignal;
pub use stack::{ModalStack, PageStack};
pub use window::SimpleWindowNavigator;

/// Shared handle to a page held by a page stack
pub type PageRef = Rc<dyn Page>;

/// Shared handle to a modal held by the window's modal stack
pub type ModalRef = Rc<dyn Modal>;

/// Identity and parent-navigator plumbing shared by pages and modals.
///
/// Implementors only need to hand out their [`GenericPageModal`]; the rest
/// has working defaults.
pub trait Navigable {
    /// The shared identity/back-reference state of this entity
    fn base(&self) -> &GenericPageModal;

    /// Identifier that tells this entity apart from the others in its stack
    fn id(&self) -> &str {
        self.base().id()
    }

    /// Records the navigator that is about to show this entity.
    ///
    /// Always called before [`Page::on_navigated_to`] or [`Modal::on_resume`].
    fn on_attached_to_navigator(&self, navigator: Weak<dyn PageNavigator>) {
        self.base().attach(navigator);
    }

    /// Called when a full reset removes this entity without re-attaching it
    fn on_detached_from_navigator(&self) {
        self.base().detach();
    }

    /// The closable capability, for entities that clean up when they are gone for good
    fn as_closable(&self) -> Option<&dyn Closable> {
        None
    }

    /// The key handling capability
    fn as_key_handler(&self) -> Option<&dyn KeyEventHandler> {
        None
    }
}

/// A unit of content occupying the main area of the window or of a host page.
pub trait Page: Navigable {
    /// Called when the page is about to be displayed. Runs before
    /// [`Page::handle_user_interactions`] and [`Page::layout`].
    fn on_navigated_to(&self);

    /// Called before every layout to pick up recent user interaction
    fn handle_user_interactions(&self);

    /// Draws the page
    fn layout(&self, ui: &mut egui::Ui) -> egui::Response;

    /// Called when the page is about to be removed from its stack.
    ///
    /// The same instance may be pushed again later, in which case
    /// [`Page::on_navigated_to`] runs again, so this should not destroy
    /// anything that `on_navigated_to` does not rebuild.
    fn on_navigated_from(&self);
}

/// An overlay shown above the current page.
pub trait Modal: Navigable {
    /// Prepares data and UI state before the modal is shown
    fn on_resume(&self);

    /// Called before every layout to pick up recent user interaction
    fn handle(&self);

    /// Draws the modal
    fn layout(&self, ui: &mut egui::Ui) -> egui::Response;

    /// Called after the modal has been dismissed. It may be shown again,
    /// in which case [`Modal::on_resume`] runs again.
    fn on_dismiss(&self);
}

/// Notification that a particular page or modal instance will never be shown again.
pub trait Closable {
    /// Fires at most once per instance
    fn on_closed(&self);
}

/// Pages and modals that react to key presses while they are on top.
pub trait KeyEventHandler {
    /// Keys this handler wants to receive
    fn keys_to_handle(&self) -> Vec<egui::Key>;

    /// Called once per press of one of [`KeyEventHandler::keys_to_handle`]
    fn handle_key_press(&self, key: egui::Key);
}

/// Navigation between pages of one stack, either the window's or a host page's.
pub trait PageNavigator {
    /// The page on top of the stack
    fn current_page(&self) -> Option<PageRef>;

    /// Id of the current page, empty when nothing is displayed
    fn current_page_id(&self) -> String {
        self.current_page()
            .map(|page| page.id().to_string())
            .unwrap_or_default()
    }

    /// Shows `page` on top of the stack, closing any other instance with the same id
    fn display(&self, page: PageRef);

    /// Closes the page on top of the stack
    fn close_current_page(&self);

    /// Closes every page above the topmost page with `keep_page_id`.
    /// Nothing is closed when no such page is on the stack.
    fn close_pages_after(&self, keep_page_id: &str);

    /// Closes every page on the stack and displays `page`
    fn clear_stack_and_display(&self, page: PageRef);

    /// Closes every page on the stack
    fn close_all_pages(&self);

    /// The navigator showing this navigator, when it is itself a page
    fn parent_navigator(&self) -> Option<Rc<dyn PageNavigator>> {
        None
    }

    /// Narrows this navigator to a window navigator, if it is one
    fn as_window(self: Rc<Self>) -> Option<Rc<dyn WindowNavigator>> {
        None
    }
}

/// The root navigator: pages plus modal overlays and window reloads.
pub trait WindowNavigator: PageNavigator {
    /// Shows `modal` above the current page. Earlier modals stay underneath.
    fn show_modal(&self, modal: ModalRef);

    /// Dismisses the topmost modal with `modal_id`, if there is one
    fn dismiss_modal(&self, modal_id: &str);

    /// The visible modal
    fn top_modal(&self) -> Option<ModalRef>;

    /// Asks the window to redraw and refreshes interaction state
    fn reload(&self);
}
