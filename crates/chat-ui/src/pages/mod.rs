//! Pages of the chat client

use chat_core::{GenericPageModal, Navigable, Page};
use egui::{Align, Layout, Response, RichText, Ui};

use crate::theme::palette;

pub mod contact;
mod main_page;
pub mod msg;
pub mod start;

pub use main_page::{MainPage, MAIN_PAGE_ID};

/// A page that shows a single centred caption
pub struct LabelPage {
    base: GenericPageModal,
    caption: String,
}

impl LabelPage {
    pub fn new(id: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            base: GenericPageModal::new(id),
            caption: caption.into(),
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

impl Navigable for LabelPage {
    fn base(&self) -> &GenericPageModal {
        &self.base
    }
}

impl Page for LabelPage {
    fn on_navigated_to(&self) {}

    fn handle_user_interactions(&self) {}

    fn layout(&self, ui: &mut Ui) -> Response {
        ui.with_layout(Layout::centered_and_justified(egui::Direction::TopDown), |ui| {
            ui.label(RichText::new(&self.caption).size(16.0).color(palette::GRAY_TEXT_1))
        })
        .inner
    }

    fn on_navigated_from(&self) {}
}

/// Lays out `page` in the remaining space to the right of the drawer
pub(crate) fn layout_child(ui: &mut Ui, page: &dyn Page) -> Response {
    ui.with_layout(Layout::top_down(Align::Min), |ui| {
        egui::Frame::none()
            .fill(palette::SURFACE)
            .show(ui, |ui| {
                ui.set_min_size(ui.available_size());
                page.layout(ui)
            })
            .inner
    })
    .inner
}
