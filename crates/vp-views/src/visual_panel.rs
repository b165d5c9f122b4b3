//! Visual panel view - shows the placeholder block for the current selection
//!
//! The panel is a pure mapping from the view-selection string to at most one
//! placeholder child. An unmatched selection is a valid "no panel" state, not
//! an error, so there is deliberately no fallback branch here.

use egui::Ui;
use tracing::trace;

use crate::{PanelView, PanelViewId, ViewerContext};

/// Map a view selector to its placeholder text.
///
/// Comparison is exact and case-sensitive. Anything outside the three known
/// selectors yields `None`.
pub fn placeholder_text(view: &str) -> Option<&'static str> {
    if view == "Grid" {
        Some("Grid Goes Here")
    } else if view == "2D Graph" {
        Some("2D Goes Here")
    } else if view == "3D Graph" {
        Some("3D Goes Here")
    } else {
        None
    }
}

/// Panel that renders the placeholder for the currently selected view.
pub struct VisualPanelView {
    id: PanelViewId,
    title: String,
}

impl VisualPanelView {
    /// Create a new visual panel view
    pub fn new(id: PanelViewId, title: String) -> Self {
        Self { id, title }
    }

    fn card_body(ui: &mut Ui, text: &str) {
        egui::Frame::none()
            .fill(ui.style().visuals.faint_bg_color)
            .stroke(ui.style().visuals.widgets.noninteractive.bg_stroke)
            .rounding(4.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(text);
            });
    }
}

impl PanelView for VisualPanelView {
    fn id(&self) -> PanelViewId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        let view = ctx.view_selection.read().clone();

        ui.push_id("DataPanelView", |ui| {
            ui.vertical(|ui| {
                if let Some(text) = placeholder_text(&view) {
                    Self::card_body(ui, text);
                } else {
                    trace!(selection = %view, "no panel for current view selection");
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PLACEHOLDERS: [&str; 3] = ["Grid Goes Here", "2D Goes Here", "3D Goes Here"];

    #[test]
    fn test_known_selectors() {
        assert_eq!(placeholder_text("Grid"), Some("Grid Goes Here"));
        assert_eq!(placeholder_text("2D Graph"), Some("2D Goes Here"));
        assert_eq!(placeholder_text("3D Graph"), Some("3D Goes Here"));
    }

    #[test]
    fn test_unmatched_selectors_yield_nothing() {
        assert_eq!(placeholder_text(""), None);
        assert_eq!(placeholder_text("grid"), None);
        assert_eq!(placeholder_text("2d graph"), None);
        assert_eq!(placeholder_text("Grid "), None);
        assert_eq!(placeholder_text("Table"), None);
    }

    #[test]
    fn test_idempotent() {
        for view in ["Grid", "2D Graph", "3D Graph", "", "anything"] {
            assert_eq!(placeholder_text(view), placeholder_text(view));
        }
    }

    #[test]
    fn test_mutually_exclusive() {
        // No selector may ever map to more than one placeholder.
        for view in ["Grid", "2D Graph", "3D Graph", "", "grid", "Grid Graph"] {
            let hits = ALL_PLACEHOLDERS
                .iter()
                .filter(|p| placeholder_text(view) == Some(**p))
                .count();
            assert!(hits <= 1, "selector {:?} matched {} placeholders", view, hits);
        }
    }

    #[test]
    fn test_choices_cover_all_placeholders() {
        for choice in crate::VIEW_CHOICES {
            assert!(placeholder_text(choice).is_some());
        }
    }

    #[test]
    fn test_id_and_display_name() {
        let id = PanelViewId::new_v4();
        let view = VisualPanelView::new(id, "Visual Panel".to_string());
        assert_eq!(view.id(), id);
        assert_eq!(view.display_name(), "Visual Panel");
    }

    /// Render the panel headless and return the height it occupied.
    fn rendered_height(selection: &str) -> f32 {
        let egui_ctx = egui::Context::default();
        let ctx = ViewerContext::new();
        *ctx.view_selection.write() = selection.to_string();

        let mut view = VisualPanelView::new(PanelViewId::new_v4(), "Visual Panel".to_string());
        let mut height = 0.0;
        let _ = egui_ctx.run(egui::RawInput::default(), |egui_ctx| {
            egui::CentralPanel::default().show(egui_ctx, |ui| {
                let scope = ui.scope(|ui| view.ui(&ctx, ui));
                height = scope.response.rect.height();
            });
        });
        height
    }

    #[test]
    fn test_ui_pass_with_unmatched_selector_renders_empty_container() {
        let matched = rendered_height("Grid");
        let unmatched = rendered_height("Table");

        // A matched selector produces a card body; anything else leaves the
        // container empty, so it occupies strictly less height.
        assert!(
            unmatched < matched,
            "empty container ({unmatched}) not smaller than card body ({matched})"
        );

        // All non-matching selectors render the same empty container.
        assert_eq!(rendered_height(""), unmatched);
        assert_eq!(rendered_height("grid"), unmatched);
    }

    #[test]
    fn test_ui_pass_leaves_record_untouched() {
        let egui_ctx = egui::Context::default();
        let ctx = ViewerContext::new();
        *ctx.view_selection.write() = "Grid".to_string();
        *ctx.selected_record.write() = Some(serde_json::json!({"id": 7}));

        let mut view = VisualPanelView::new(PanelViewId::new_v4(), "Visual Panel".to_string());
        let _ = egui_ctx.run(egui::RawInput::default(), |egui_ctx| {
            egui::CentralPanel::default().show(egui_ctx, |ui| {
                view.ui(&ctx, ui);
            });
        });

        assert_eq!(
            ctx.selected_record.read().as_ref(),
            Some(&serde_json::json!({"id": 7}))
        );
    }
}
