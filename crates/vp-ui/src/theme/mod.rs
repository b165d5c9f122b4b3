use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Panel Dark".to_string(),
            dark_mode: true,
        }
    }
}

/// Apply the application theme
pub fn apply_theme(ctx: &Context, _theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = Visuals::dark();

    let bg_color = Color32::from_rgb(24, 24, 27);        // Window background
    let panel_bg = Color32::from_rgb(32, 32, 36);        // Panel background
    let widget_bg = Color32::from_rgb(42, 42, 47);       // Widget background
    let hover_color = Color32::from_rgb(54, 54, 60);     // Hover state
    let accent_color = accent_color();                   // Blue accent
    let text_color = Color32::from_rgb(222, 222, 226);   // Primary text

    visuals.window_fill = panel_bg;
    visuals.panel_fill = panel_bg;
    visuals.extreme_bg_color = bg_color;
    visuals.faint_bg_color = widget_bg;

    visuals.widgets.noninteractive.bg_fill = widget_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(62, 62, 68));
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = hover_color;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = accent_color.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color);
    visuals.hyperlink_color = accent_color;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

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

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(110, 140, 240)
}
