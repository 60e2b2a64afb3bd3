//! View functions: derive what the UI shows from an [`EditorState`].
//!
//! The preview always shows title, image and content in that order; the
//! section order only affects the editor panel.

use ebuilder_core::template::{Alignment, FONT_SIZES};
use ebuilder_core::types::DbId;

use crate::section::Section;
use crate::state::EditorState;

const TITLE_PLACEHOLDER: &str = "Your Title Here";
const CONTENT_PLACEHOLDER: &str = "Your content will appear here...";
const UNTITLED: &str = "Untitled Template";
const NEW_TEMPLATE: &str = "Create New Template";

/// One entry of the template selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// `None` for the "new template" entry.
    pub value: Option<DbId>,
    pub label: String,
    pub selected: bool,
}

/// Control rendered inside an editor section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionControl {
    /// Text input plus the title color swatch.
    TitleInput {
        value: String,
        color: String,
        picker_open: bool,
    },
    /// File picker with an optional preview of the current image.
    ImageUpload {
        button_label: &'static str,
        preview_url: Option<String>,
    },
    /// Multi-line body text.
    ContentInput { value: String },
}

/// An editor panel block, in the user's chosen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub section: Section,
    pub heading: &'static str,
    pub control: SectionControl,
}

/// Entries of the template selector: "new" first, then saved templates.
pub fn template_options(state: &EditorState) -> Vec<SelectOption> {
    let new_entry = SelectOption {
        value: None,
        label: NEW_TEMPLATE.to_string(),
        selected: state.selected_template_id.is_none(),
    };

    std::iter::once(new_entry)
        .chain(state.templates.iter().map(|t| {
            let title = t.payload.title_or_empty();
            SelectOption {
                value: Some(t.id),
                label: (if title.is_empty() { UNTITLED } else { title }).to_string(),
                selected: state.selected_template_id == Some(t.id),
            }
        }))
        .collect()
}

/// Editor panel blocks in section order.
pub fn editor_sections(state: &EditorState) -> Vec<SectionView> {
    let draft = &state.draft;
    let styles = draft.styles.clone().unwrap_or_default();

    state
        .sections
        .iter()
        .map(|&section| {
            let control = match section {
                Section::Title => SectionControl::TitleInput {
                    value: draft.title_or_empty().to_string(),
                    color: styles.title_color_or_default().to_string(),
                    picker_open: state.show_color_picker,
                },
                Section::Image => {
                    let url = draft.image_url_or_empty();
                    SectionControl::ImageUpload {
                        button_label: if url.is_empty() {
                            "Upload Image"
                        } else {
                            "Change Image"
                        },
                        preview_url: (!url.is_empty()).then(|| url.to_string()),
                    }
                }
                Section::Content => SectionControl::ContentInput {
                    value: draft.content_or_empty().to_string(),
                },
            };
            SectionView {
                section,
                heading: section.heading(),
                control,
            }
        })
        .collect()
}

pub fn save_button_label(state: &EditorState) -> &'static str {
    if state.is_loading {
        "Saving..."
    } else if state.is_editing_existing() {
        "Update Template"
    } else {
        "Save Template"
    }
}

pub fn download_button_label(state: &EditorState) -> &'static str {
    if state.is_loading {
        "Generating..."
    } else {
        "Download HTML"
    }
}

/// Both action buttons are disabled while a request is in flight.
pub fn actions_enabled(state: &EditorState) -> bool {
    !state.is_loading
}

/// Font size choices as `(label, token, selected)`.
pub fn font_size_options(state: &EditorState) -> Vec<(&'static str, &'static str, bool)> {
    let current = state
        .draft
        .styles
        .as_ref()
        .map(|s| s.font_size_or_default().to_string());
    FONT_SIZES
        .iter()
        .map(|&(label, token)| (label, token, current.as_deref() == Some(token)))
        .collect()
}

/// Alignment buttons as `(alignment, active)`.
pub fn alignment_options(state: &EditorState) -> Vec<(Alignment, bool)> {
    let current = state
        .draft
        .styles
        .as_ref()
        .map(|s| s.alignment_or_default())
        .unwrap_or_default();
    Alignment::ALL
        .iter()
        .map(|&a| (a, a == current))
        .collect()
}

/// HTML of the live preview panel.
///
/// User text is escaped here, unlike in the downloaded file.
pub fn preview_html(state: &EditorState) -> String {
    let draft = &state.draft;
    let styles = draft.styles.clone().unwrap_or_default();

    let title = match draft.title_or_empty() {
        "" => TITLE_PLACEHOLDER,
        t => t,
    };
    let content = match draft.content_or_empty() {
        "" => CONTENT_PLACEHOLDER,
        c => c,
    };

    let mut html = format!(
        "<div class=\"preview-container\" style=\"text-align: {};\">",
        styles.alignment_or_default().as_str()
    );
    html.push_str(&format!(
        "<h1 style=\"color: {};\">{}</h1>",
        escape_html(styles.title_color_or_default()),
        escape_html(title)
    ));
    let image_url = draft.image_url_or_empty();
    if !image_url.is_empty() {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"Preview\" style=\"max-width: 100%;\">",
            escape_html(image_url)
        ));
    }
    html.push_str(&format!(
        "<div style=\"font-size: {};\">{}</div>",
        escape_html(styles.font_size_or_default()),
        escape_html(content)
    ));
    html.push_str("</div>");
    html
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
