//! View system for the visual panel application

mod panel;
mod visual_panel;

pub use panel::{PanelView, PanelViewId};
pub use visual_panel::{placeholder_text, VisualPanelView};

use std::sync::Arc;
use parking_lot::RwLock;
use serde_json::Value;

/// Selector values the UI offers. Membership is not enforced on the stored
/// selection: any string is a legal value, and anything outside this set
/// simply renders no panel.
pub const VIEW_CHOICES: [&str; 3] = ["Grid", "2D Graph", "3D Graph"];

/// Context passed to views during rendering.
///
/// The state here is owned by the hosting application; views read it fresh
/// on every frame and never write it.
#[derive(Clone)]
pub struct ViewerContext {
    /// Current view selection (an unconstrained string)
    pub view_selection: Arc<RwLock<String>>,

    /// Currently selected record, if any. Carried for the panel contract but
    /// not consulted by any current view.
    pub selected_record: Arc<RwLock<Option<Value>>>,
}

impl ViewerContext {
    /// Create a context with no view selected and no record.
    pub fn new() -> Self {
        Self {
            view_selection: Arc::new(RwLock::new(String::new())),
            selected_record: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for ViewerContext {
    fn default() -> Self {
        Self::new()
    }
}
