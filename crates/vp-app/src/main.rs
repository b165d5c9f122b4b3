//! Main application entry point

use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vp_ui::{AppState, Theme};
use vp_views::{PanelView, PanelViewId, ViewerContext, VisualPanelView};

/// Main application state
struct VisualPanelApp {
    /// Views hosted in the central panel
    views: Vec<Box<dyn PanelView>>,

    /// Viewer context shared with all views
    viewer_context: ViewerContext,

    /// UI state (settings, chrome visibility)
    app_state: AppState,
}

impl VisualPanelApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        vp_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        // The context owns the view selection; views only read it.
        let viewer_context = ViewerContext::new();

        let panel = VisualPanelView::new(PanelViewId::new_v4(), "Visual Panel".to_string());

        Self {
            views: vec![Box::new(panel)],
            viewer_context,
            app_state: AppState::default(),
        }
    }
}

impl eframe::App for VisualPanelApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        vp_ui::menu_bar(ctx, &mut self.app_state, &self.viewer_context);

        if self.app_state.settings.show_selector_bar {
            vp_ui::selector_bar(ctx, &self.viewer_context);
        }

        vp_ui::central_panel(ctx, &mut self.views, &self.viewer_context);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting visual panel app");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([480.0, 320.0]),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Visual Panel",
        options,
        Box::new(|cc| Box::new(VisualPanelApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
