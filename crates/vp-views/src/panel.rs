//! Panel view abstraction - base trait for views hosted by the shell

use egui::Ui;

use crate::ViewerContext;

/// Unique identifier for a panel view
pub type PanelViewId = uuid::Uuid;

/// Base trait for all panel views.
pub trait PanelView: Send + Sync {
    /// Get the unique ID of this view
    fn id(&self) -> PanelViewId;

    /// Get the display name
    fn display_name(&self) -> &str;

    /// Draw the UI
    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui);
}
