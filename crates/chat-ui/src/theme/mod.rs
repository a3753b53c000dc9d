use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

use tracing::debug;

/// Color palette of the client
pub mod palette {
    use egui::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(0x29, 0x70, 0xff);
    pub const PRIMARY_50: Color32 = Color32::from_rgb(0xe3, 0xf2, 0xff);
    pub const PRIMARY_HIGHLIGHT: Color32 = Color32::from_rgb(0x1b, 0x41, 0xb3);

    pub const TEXT: Color32 = Color32::from_rgb(0x09, 0x14, 0x40);
    pub const GRAY_TEXT_1: Color32 = Color32::from_rgb(0x3d, 0x58, 0x73);
    pub const GRAY_TEXT_3: Color32 = Color32::from_rgb(0x89, 0x97, 0xa5);
    pub const GREEN_TEXT: Color32 = Color32::from_rgb(0x41, 0xbe, 0x53);

    pub const GRAY_2: Color32 = Color32::from_rgb(0xe6, 0xea, 0xed);
    pub const GRAY_3: Color32 = Color32::from_rgb(0xc4, 0xcb, 0xd2);
    pub const GRAY_4: Color32 = Color32::from_rgb(0xf3, 0xf5, 0xf6);
    pub const GRAY_5: Color32 = Color32::from_rgb(0xf5, 0xf5, 0xf5);
    pub const SURFACE: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);

    /// Background of the navigation drawer
    pub const DARK_GRAY: Color32 = Color32::from_rgb(0x2e, 0x2e, 0x2e);
}

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Chat Light".to_string(),
            dark_mode: false,
        }
    }
}

/// Apply the application theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    debug!(theme = %theme.name, dark = theme.dark_mode, "applying theme");
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    // Window and panel styling
    visuals.window_fill = palette::SURFACE;
    visuals.panel_fill = palette::GRAY_4;
    visuals.extreme_bg_color = palette::SURFACE;
    visuals.faint_bg_color = palette::GRAY_5;

    // Widget styling
    visuals.widgets.noninteractive.bg_fill = palette::SURFACE;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette::GRAY_2);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette::TEXT);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = palette::GRAY_2;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette::TEXT);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = palette::GRAY_3;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette::TEXT);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = palette::PRIMARY_50;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, palette::PRIMARY);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette::PRIMARY_HIGHLIGHT);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    // Selection and highlighting
    visuals.selection.bg_fill = palette::PRIMARY.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, palette::PRIMARY);
    visuals.hyperlink_color = palette::PRIMARY;

    // Modals sit on a soft shadow
    visuals.window_shadow.extrusion = 12.0;
    visuals.popup_shadow.extrusion = 6.0;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(13.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Color of an icon in the navigation drawer
pub fn drawer_icon_color(active: bool) -> Color32 {
    if active {
        palette::GREEN_TEXT
    } else {
        palette::GRAY_TEXT_3
    }
}
