//! Placeholder substitution over the email layout.
//!
//! Rendering is a sequence of literal replacements. Each token is replaced
//! at its first occurrence only; later occurrences of the same token stay
//! in the output. Values are inserted verbatim, without HTML escaping.

use crate::template::TemplatePayload;

/// Placeholder for the template title.
pub const TITLE_TOKEN: &str = "{{title}}";

/// Placeholder for the template body content.
pub const CONTENT_TOKEN: &str = "{{content}}";

/// Placeholder for the uploaded image path.
pub const IMAGE_URL_TOKEN: &str = "{{imageUrl}}";

/// An ordered token → value mapping applied to a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    entries: Vec<(String, String)>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a substitution. Substitutions run in insertion order.
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((token.into(), value.into()));
        self
    }

    /// The title, content and image substitutions for a template.
    ///
    /// Absent fields substitute the empty string.
    pub fn for_template(template: &TemplatePayload) -> Self {
        Self::new()
            .with(TITLE_TOKEN, template.title_or_empty())
            .with(CONTENT_TOKEN, template.content_or_empty())
            .with(IMAGE_URL_TOKEN, template.image_url_or_empty())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }
}

/// Apply every substitution in `tokens` to `layout`, first occurrence only.
///
/// Substitutions are applied one after another to the intermediate text,
/// so a value that itself contains a later token will be matched by it.
pub fn render_layout(layout: &str, tokens: &TokenMap) -> String {
    tokens
        .entries()
        .fold(layout.to_string(), |acc, (token, value)| {
            acc.replacen(token, value, 1)
        })
}

/// Render a template into the layout.
pub fn render_template(layout: &str, template: &TemplatePayload) -> String {
    render_layout(layout, &TokenMap::for_template(template))
}
