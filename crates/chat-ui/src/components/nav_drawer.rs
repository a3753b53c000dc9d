//! Navigation drawer on the left edge of the main page
//!
//! The drawer only records clicks while it is drawn. Its owner drains them
//! with [`NavDrawer::take_clicked`] from its interaction hook and decides
//! what to navigate to.

use egui::{Align, Button, Layout, Response, RichText, Sense, Ui, ViewportCommand};

use crate::theme::{drawer_icon_color, palette};

/// Width of the collapsed drawer
pub const DRAWER_WIDTH: f32 = 64.0;

const ITEM_SIZE: f32 = 44.0;
const ITEM_SPACING: f32 = 8.0;
const ICON_SIZE: f32 = 20.0;

/// One entry of the drawer
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub title: String,
    pub icon: &'static str,
    /// Page or modal id the item leads to
    pub target_id: String,
}

impl NavItem {
    pub fn new(title: impl Into<String>, icon: &'static str, target_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon,
            target_id: target_id.into(),
        }
    }
}

/// Vertical icon bar: page items on top, utility items at the bottom, and
/// an empty strip in between that drags the window.
pub struct NavDrawer {
    pub nav_items: Vec<NavItem>,
    pub util_items: Vec<NavItem>,
    /// Id of the page shown next to the drawer, highlighted when it matches an item
    pub current_page: String,
    width: f32,
    clicked: Vec<String>,
}

impl NavDrawer {
    pub fn new(current_page: impl Into<String>, nav_items: Vec<NavItem>, util_items: Vec<NavItem>) -> Self {
        Self {
            nav_items,
            util_items,
            current_page: current_page.into(),
            width: DRAWER_WIDTH,
            clicked: Vec::new(),
        }
    }

    /// Targets clicked since the last call, in click order
    pub fn take_clicked(&mut self) -> Vec<String> {
        std::mem::take(&mut self.clicked)
    }

    /// Records a click on `target_id` as if its item had been pressed
    pub fn click(&mut self, target_id: impl Into<String>) {
        self.clicked.push(target_id.into());
    }

    pub fn layout(&mut self, ui: &mut Ui) -> Response {
        let size = egui::vec2(self.width, ui.available_height());
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        ui.painter().rect_filled(rect, 0.0, palette::DARK_GRAY);

        let mut drawer = ui.child_ui(rect, Layout::top_down(Align::Center));
        drawer.spacing_mut().item_spacing.y = ITEM_SPACING;
        drawer.add_space(ITEM_SPACING * 2.0);

        for item in &self.nav_items {
            let active = item.target_id == self.current_page;
            if item_button(&mut drawer, item, active).clicked() {
                self.clicked.push(item.target_id.clone());
            }
        }

        // Undecorated window: the empty middle of the drawer moves it
        let util_height = self.util_items.len() as f32 * (ITEM_SIZE + ITEM_SPACING) + ITEM_SPACING;
        let drag_height = (drawer.available_height() - util_height).max(0.0);
        let drag_area = drawer.allocate_response(egui::vec2(self.width, drag_height), Sense::click_and_drag());
        if drag_area.is_pointer_button_down_on() {
            ui.ctx().send_viewport_cmd(ViewportCommand::StartDrag);
        }

        for item in &self.util_items {
            if item_button(&mut drawer, item, false).clicked() {
                self.clicked.push(item.target_id.clone());
            }
        }

        response
    }
}

fn item_button(ui: &mut Ui, item: &NavItem, active: bool) -> Response {
    let icon = RichText::new(item.icon)
        .size(ICON_SIZE)
        .color(drawer_icon_color(active));

    ui.add_sized([ITEM_SIZE, ITEM_SIZE], Button::new(icon).frame(false))
        .on_hover_text(&item.title)
}
