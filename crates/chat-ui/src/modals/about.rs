//! About box

use std::cell::Cell;
use std::rc::Rc;

use chat_core::{GenericPageModal, KeyEventHandler, Modal, Navigable};
use egui::{Key, Response, RichText, Ui};
use tracing::{debug, warn};

use crate::theme::palette;

pub const MODAL_ID: &str = "about";

/// Shows the application name and version until it is closed with its
/// button or the Escape key.
pub struct AboutModal {
    base: GenericPageModal,
    close_requested: Cell<bool>,
}

impl AboutModal {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            base: GenericPageModal::new(MODAL_ID),
            close_requested: Cell::new(false),
        })
    }

    /// Dismiss on the next interaction pass
    pub fn request_close(&self) {
        self.close_requested.set(true);
    }
}

impl Navigable for AboutModal {
    fn base(&self) -> &GenericPageModal {
        &self.base
    }

    fn as_key_handler(&self) -> Option<&dyn KeyEventHandler> {
        Some(self)
    }
}

impl Modal for AboutModal {
    fn on_resume(&self) {
        self.close_requested.set(false);
    }

    fn handle(&self) {
        if !self.close_requested.replace(false) {
            return;
        }
        match self.base.parent_window() {
            Some(window) => window.dismiss_modal(self.id()),
            None => warn!(modal = self.id(), "modal is not in a window, cannot dismiss"),
        }
    }

    fn layout(&self, ui: &mut Ui) -> Response {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("wechat").color(palette::TEXT));
            ui.label(
                RichText::new(format!("version {}", env!("CARGO_PKG_VERSION")))
                    .color(palette::GRAY_TEXT_3),
            );
            ui.add_space(12.0);
            if ui.button("Close").clicked() {
                self.request_close();
                ui.ctx().request_repaint();
            }
        })
        .response
    }

    fn on_dismiss(&self) {
        debug!(modal = self.id(), "about dismissed");
    }
}

impl KeyEventHandler for AboutModal {
    fn keys_to_handle(&self) -> Vec<Key> {
        vec![Key::Escape]
    }

    fn handle_key_press(&self, key: Key) {
        if key == Key::Escape {
            self.request_close();
        }
    }
}
