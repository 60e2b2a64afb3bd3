use ebuilder_core::template::TemplatePayload;
use ebuilder_core::types::DbId;

use crate::client::SavedTemplate;
use crate::section::Section;

/// Confirmation shown after a successful save.
pub const SAVE_SUCCESS_NOTICE: &str = "Template saved successfully!";

/// Everything the editor UI renders from.
///
/// Owned by [`Editor`](crate::controller::Editor); views receive snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// The template being edited.
    pub draft: TemplatePayload,
    /// Order of the editor panel sections.
    pub sections: Vec<Section>,
    /// Templates known to the service, newest first.
    pub templates: Vec<SavedTemplate>,
    /// `None` while composing a new template.
    pub selected_template_id: Option<DbId>,
    /// Set while a request is in flight. Does not block further actions.
    pub is_loading: bool,
    pub show_color_picker: bool,
    /// Last user-facing confirmation, if any.
    pub notice: Option<String>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            draft: TemplatePayload::blank(),
            sections: Section::DEFAULT_ORDER.to_vec(),
            templates: Vec::new(),
            selected_template_id: None,
            is_loading: false,
            show_color_picker: false,
            notice: None,
        }
    }
}

impl EditorState {
    pub fn is_editing_existing(&self) -> bool {
        self.selected_template_id.is_some()
    }
}
