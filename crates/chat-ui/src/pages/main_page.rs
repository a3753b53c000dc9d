//! The main page: navigation drawer plus a sub-page area

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use chat_core::{
    Closable, GenericPageModal, KeyEventHandler, MasterPage, Navigable, Page, PageHost,
    PageNavigator, PageRef,
};
use egui::{Key, Response, Ui};
use tracing::{debug, warn};

use super::{contact, layout_child, msg, start};
use crate::components::{NavDrawer, NavItem};
use crate::modals::{about, AboutModal};

pub const MAIN_PAGE_ID: &str = "Main";

/// Root page of the window. Hosts the start, messages and contacts pages and
/// switches between them from the drawer.
pub struct MainPage {
    host: MasterPage,
    drawer: RefCell<NavDrawer>,
}

impl MainPage {
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<MainPage>| {
            let this: Weak<dyn PageNavigator> = this.clone();
            Self {
                host: MasterPage::new(MAIN_PAGE_ID, this),
                drawer: RefCell::new(NavDrawer::new(String::new(), nav_items(), util_items())),
            }
        })
    }

    /// The drawer, for feeding clicks and reading its highlight
    pub fn drawer(&self) -> &RefCell<NavDrawer> {
        &self.drawer
    }

    fn open(&self, target_id: &str) {
        let page: PageRef = match target_id {
            msg::PAGE_ID => msg::new_page(),
            contact::PAGE_ID => contact::new_page(),
            about::MODAL_ID => {
                self.show_about();
                return;
            }
            other => {
                warn!(target = other, "drawer item has no destination");
                return;
            }
        };

        if page.id() == self.current_page_id() {
            debug!(page = page.id(), "already showing page");
            return;
        }
        self.display(page);
    }

    fn show_about(&self) {
        match self.host.base().parent_window() {
            Some(window) => window.show_modal(AboutModal::new()),
            None => warn!("main page is not in a window, cannot show about"),
        }
    }
}

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("消息", "💬", msg::PAGE_ID),
        NavItem::new("通讯录", "👤", contact::PAGE_ID),
    ]
}

fn util_items() -> Vec<NavItem> {
    vec![NavItem::new("About", "ℹ", about::MODAL_ID)]
}

impl PageHost for MainPage {
    fn host(&self) -> &MasterPage {
        &self.host
    }
}

impl Navigable for MainPage {
    fn base(&self) -> &GenericPageModal {
        self.host.base()
    }

    fn as_closable(&self) -> Option<&dyn Closable> {
        Some(self)
    }

    fn as_key_handler(&self) -> Option<&dyn KeyEventHandler> {
        Some(self)
    }
}

impl Page for MainPage {
    fn on_navigated_to(&self) {
        match self.current_page() {
            Some(page) => page.on_navigated_to(),
            // Pushing runs the start page's own navigated-to hook. The window
            // displaying this page reloads once it returns.
            None => self.host.display_without_reload(start::new_page()),
        }
    }

    fn handle_user_interactions(&self) {
        if let Some(page) = self.current_page() {
            page.handle_user_interactions();
        }

        let clicked = self.drawer.borrow_mut().take_clicked();
        for target_id in clicked {
            self.open(&target_id);
        }

        self.drawer.borrow_mut().current_page = self.current_page_id();
    }

    fn layout(&self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            self.drawer.borrow_mut().layout(ui);
            if let Some(page) = self.current_page() {
                layout_child(ui, page.as_ref());
            }
        })
        .response
    }

    fn on_navigated_from(&self) {
        if let Some(page) = self.current_page() {
            page.on_navigated_from();
        }
    }
}

impl Closable for MainPage {
    fn on_closed(&self) {
        // Navigated-from has already been forwarded to the current sub-page
        // and the window reloads for the removal of this page.
        debug!("main page closed, closing sub-pages");
        self.host.sub_pages().clear_departed();
    }
}

impl KeyEventHandler for MainPage {
    fn keys_to_handle(&self) -> Vec<Key> {
        self.current_page()
            .and_then(|page| page.as_key_handler().map(|handler| handler.keys_to_handle()))
            .unwrap_or_default()
    }

    fn handle_key_press(&self, key: Key) {
        if let Some(page) = self.current_page() {
            if let Some(handler) = page.as_key_handler() {
                handler.handle_key_press(key);
            }
        }
    }
}
