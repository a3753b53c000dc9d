//! The native window: owns the window navigator and drives it once per frame

use std::rc::Rc;
use std::sync::Arc;

use chat_core::events::typed_handler;
use chat_core::{
    EventBus, KeyEventHandler, NavigationChanged, PageNavigator, ReloadSignal,
    SimpleWindowNavigator,
};
use chat_ui::pages::MainPage;
use chat_ui::theme::palette;
use egui::{Context, Key, ViewportCommand};
use tracing::{debug, info};

use crate::config::AppConfig;

const MODAL_MIN_WIDTH: f32 = 280.0;
const BACKDROP_ALPHA: u8 = 96;

pub struct ChatWindow {
    navigator: Rc<SimpleWindowNavigator>,
    event_bus: Arc<EventBus>,
}

impl ChatWindow {
    pub fn new(ctx: &Context, config: &AppConfig) -> Self {
        let event_bus = Arc::new(EventBus::new());

        let title_ctx = ctx.clone();
        let base_title = config.window.title.clone();
        event_bus.subscribe::<NavigationChanged>(typed_handler(move |event: &NavigationChanged| {
            debug!(page = %event.current_page_id, depth = event.depth, "navigation changed");
            let title = window_title(&base_title, &event.current_page_id);
            title_ctx.send_viewport_cmd(ViewportCommand::Title(title));
        }));

        let repaint_ctx = ctx.clone();
        let navigator = SimpleWindowNavigator::with_event_bus(
            move || repaint_ctx.request_repaint(),
            event_bus.clone(),
        );

        Self { navigator, event_bus }
    }

    pub fn navigator(&self) -> &Rc<SimpleWindowNavigator> {
        &self.navigator
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    /// Handle for background work that needs the window refreshed
    pub fn reload_signal(&self) -> ReloadSignal {
        self.navigator.reload_signal()
    }

    /// One frame: navigation first, then drawing
    pub fn frame(&self, ctx: &Context) {
        self.navigator.poll_reload_signal();

        if self.navigator.current_page().is_none() {
            info!("nothing displayed, starting with the main page");
            self.navigator.display(MainPage::new());
        } else {
            self.dispatch_keys(|key| ctx.input(|input| input.key_pressed(key)));
            self.navigator.handle_user_interactions();
        }

        self.render(ctx);
    }

    /// Sends pressed keys to the visible modal, or to the current page when
    /// no modal is up
    fn dispatch_keys(&self, pressed: impl Fn(Key) -> bool) {
        if let Some(modal) = self.navigator.modal_stack().top() {
            if let Some(handler) = modal.as_key_handler() {
                send_pressed(handler, &pressed);
            }
            return;
        }

        if let Some(page) = self.navigator.current_page() {
            if let Some(handler) = page.as_key_handler() {
                send_pressed(handler, &pressed);
            }
        }
    }

    fn render(&self, ctx: &Context) {
        let modal = self.navigator.modal_stack().top();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(palette::GRAY_4))
            .show(ctx, |ui| {
                if let Some(page) = self.navigator.current_page() {
                    ui.add_enabled_ui(modal.is_none(), |ui| {
                        page.layout(ui);
                    });
                }
            });

        if let Some(modal) = modal {
            // Dim the page underneath
            egui::Area::new("modal_backdrop")
                .fixed_pos([0.0, 0.0])
                .interactable(false)
                .show(ctx, |ui| {
                    ui.painter().rect_filled(
                        ctx.screen_rect(),
                        0.0,
                        egui::Color32::from_black_alpha(BACKDROP_ALPHA),
                    );
                });

            egui::Area::new("modal_overlay")
                .order(egui::Order::Foreground)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style())
                        .fill(palette::SURFACE)
                        .inner_margin(24.0)
                        .show(ui, |ui| {
                            ui.set_min_width(MODAL_MIN_WIDTH);
                            modal.layout(ui);
                        });
                });
        }
    }

    /// Closes everything shown so pages can release what they hold
    pub fn shutdown(&self) {
        info!("shutting down window");
        self.navigator.dismiss_all_modals();
        self.navigator.close_all_pages();
    }
}

impl eframe::App for ChatWindow {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.shutdown();
    }
}

fn send_pressed(handler: &dyn KeyEventHandler, pressed: &impl Fn(Key) -> bool) {
    for key in handler.keys_to_handle() {
        if pressed(key) {
            handler.handle_key_press(key);
        }
    }
}

fn window_title(base: &str, page_id: &str) -> String {
    if page_id.is_empty() {
        base.to_string()
    } else {
        format!("{base} - {page_id}")
    }
}
