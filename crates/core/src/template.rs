//! Template payload and style types.
//!
//! Every field is optional: an absent title, image or style key is a valid
//! state. The same payload shape is used for create, update and render
//! requests, and as the editor's draft.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default title and content color.
pub const DEFAULT_COLOR: &str = "#000000";

/// Small font size token.
pub const FONT_SIZE_SMALL: &str = "12px";

/// Medium font size token (the default).
pub const FONT_SIZE_MEDIUM: &str = "16px";

/// Large font size token.
pub const FONT_SIZE_LARGE: &str = "20px";

/// Font size choices offered by the editor, as `(label, token)` pairs.
pub const FONT_SIZES: &[(&str, &str)] = &[
    ("Small", FONT_SIZE_SMALL),
    ("Medium", FONT_SIZE_MEDIUM),
    ("Large", FONT_SIZE_LARGE),
];

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// Horizontal text alignment of the composed email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// All alignments in display order.
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    /// CSS `text-align` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

/// Styling options stored alongside a template.
///
/// `content_color` is persisted but not applied by any renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl TemplateStyles {
    /// Styles of a freshly created draft: black text, medium size, left aligned.
    pub fn editor_defaults() -> Self {
        Self {
            title_color: Some(DEFAULT_COLOR.to_string()),
            content_color: Some(DEFAULT_COLOR.to_string()),
            font_size: Some(FONT_SIZE_MEDIUM.to_string()),
            alignment: Some(Alignment::Left),
        }
    }

    pub fn title_color_or_default(&self) -> &str {
        self.title_color.as_deref().unwrap_or(DEFAULT_COLOR)
    }

    pub fn font_size_or_default(&self) -> &str {
        self.font_size.as_deref().unwrap_or(FONT_SIZE_MEDIUM)
    }

    pub fn alignment_or_default(&self) -> Alignment {
        self.alignment.unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// A template's user-editable fields, without `id` or `createdAt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<TemplateStyles>,
}

impl TemplatePayload {
    /// An empty draft: blank text fields and the editor's default styles.
    pub fn blank() -> Self {
        Self {
            title: Some(String::new()),
            content: Some(String::new()),
            image_url: Some(String::new()),
            styles: Some(TemplateStyles::editor_defaults()),
        }
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn image_url_or_empty(&self) -> &str {
        self.image_url.as_deref().unwrap_or_default()
    }

    /// Mutable access to the styles, creating an empty styles object if absent.
    pub fn styles_mut(&mut self) -> &mut TemplateStyles {
        self.styles.get_or_insert_with(TemplateStyles::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_camel_case_keys() {
        let payload = TemplatePayload {
            image_url: Some("/uploads/1-a.png".into()),
            styles: Some(TemplateStyles {
                title_color: Some("#ff0000".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["imageUrl"], "/uploads/1-a.png");
        assert_eq!(json["styles"]["titleColor"], "#ff0000");
        assert!(json.get("title").is_none());
        assert!(json["styles"].get("fontSize").is_none());
    }

    #[test]
    fn empty_object_deserializes_to_all_absent() {
        let payload: TemplatePayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, TemplatePayload::default());
    }

    #[test]
    fn alignment_is_lowercase_on_the_wire() {
        let styles: TemplateStyles =
            serde_json::from_value(serde_json::json!({"alignment": "center"})).unwrap();
        assert_eq!(styles.alignment, Some(Alignment::Center));
        assert!(serde_json::from_value::<TemplateStyles>(
            serde_json::json!({"alignment": "justify"})
        )
        .is_err());
    }

    #[test]
    fn blank_draft_has_editor_defaults() {
        let blank = TemplatePayload::blank();
        assert_eq!(blank.title_or_empty(), "");
        let styles = blank.styles.unwrap();
        assert_eq!(styles.title_color_or_default(), DEFAULT_COLOR);
        assert_eq!(styles.font_size_or_default(), FONT_SIZE_MEDIUM);
        assert_eq!(styles.alignment_or_default(), Alignment::Left);
    }

    #[test]
    fn styles_mut_creates_missing_styles() {
        let mut payload = TemplatePayload::default();
        payload.styles_mut().font_size = Some(FONT_SIZE_LARGE.into());
        assert_eq!(
            payload.styles.unwrap().font_size.as_deref(),
            Some(FONT_SIZE_LARGE)
        );
    }
}
