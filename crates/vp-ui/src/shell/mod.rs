use egui::{CentralPanel, Context, TopBottomPanel};
use tracing::info;

use crate::AppState;
use vp_views::{PanelView, ViewerContext, VIEW_CHOICES};

/// Replace the current view selection.
///
/// Any string is accepted; clearing to an empty string is how "no view" is
/// expressed, so the stored value is never validated against VIEW_CHOICES.
fn set_selection(viewer_context: &ViewerContext, value: &str) {
    let mut selection = viewer_context.view_selection.write();
    if *selection != value {
        info!(from = %*selection, to = %value, "view selection changed");
        *selection = value.to_string();
    }
}

/// Render the main menu bar
pub fn menu_bar(ctx: &Context, app_state: &mut AppState, viewer_context: &ViewerContext) {
    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // View menu
            ui.menu_button("View", |ui| {
                let current = viewer_context.view_selection.read().clone();

                for choice in VIEW_CHOICES {
                    if ui.selectable_label(current == choice, choice).clicked() {
                        set_selection(viewer_context, choice);
                        ui.close_menu();
                    }
                }

                ui.separator();

                if ui.selectable_label(current.is_empty(), "None").clicked() {
                    set_selection(viewer_context, "");
                    ui.close_menu();
                }

                ui.separator();

                if ui
                    .checkbox(&mut app_state.settings.show_selector_bar, "Selector Bar")
                    .clicked()
                {
                    ui.close_menu();
                }
            });

            // Right-aligned status showing the live selection
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let current = viewer_context.view_selection.read().clone();
                if current.is_empty() {
                    ui.label("No view selected");
                } else {
                    ui.label(current);
                }
            });
        });
    });
}

/// Render the selector bar with one toggle per known view
pub fn selector_bar(ctx: &Context, viewer_context: &ViewerContext) {
    TopBottomPanel::top("selector_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let current = viewer_context.view_selection.read().clone();

            for choice in VIEW_CHOICES {
                let selected = current == choice;
                if ui.selectable_label(selected, choice).clicked() {
                    // Clicking the active toggle clears the selection.
                    if selected {
                        set_selection(viewer_context, "");
                    } else {
                        set_selection(viewer_context, choice);
                    }
                }
            }
        });
    });
}

/// Render the central panel hosting the views
pub fn central_panel(
    ctx: &Context,
    views: &mut [Box<dyn PanelView>],
    viewer_context: &ViewerContext,
) {
    CentralPanel::default().show(ctx, |ui| {
        for view in views.iter_mut() {
            // Scope each view by its id so repeated view types keep unique
            // widget ids.
            ui.push_id(view.id(), |ui| {
                ui.heading(view.display_name());
                view.ui(viewer_context, ui);
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use vp_views::{PanelViewId, VisualPanelView};

    #[test]
    fn test_central_panel_hosts_views() {
        let egui_ctx = egui::Context::default();
        let viewer_context = ViewerContext::new();
        *viewer_context.view_selection.write() = "Grid".to_string();

        let mut views: Vec<Box<dyn PanelView>> = vec![Box::new(VisualPanelView::new(
            PanelViewId::new_v4(),
            "Visual Panel".to_string(),
        ))];

        // One full pass over the shell's central panel, headless.
        let _ = egui_ctx.run(egui::RawInput::default(), |egui_ctx| {
            central_panel(egui_ctx, &mut views, &viewer_context);
        });
    }
}
