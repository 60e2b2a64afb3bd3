//! The editor controller.
//!
//! [`Editor`] holds the single [`EditorState`] in a `watch` channel. Field
//! edits apply synchronously; service calls set `is_loading` for their
//! duration. Failures of service calls are logged and otherwise swallowed:
//! the draft stays as it was and loading ends. Nothing stops a second call
//! from starting while one is pending; the last response to arrive wins.

use ebuilder_core::template::{Alignment, TemplatePayload};
use ebuilder_core::types::DbId;
use tokio::sync::watch;

use crate::client::TemplateApi;
use crate::download::HtmlDownload;
use crate::section::{self, DragResult};
use crate::state::{EditorState, SAVE_SUCCESS_NOTICE};

pub struct Editor<C> {
    client: C,
    state: watch::Sender<EditorState>,
}

impl<C: TemplateApi> Editor<C> {
    pub fn new(client: C) -> Self {
        let (state, _) = watch::channel(EditorState::default());
        Self { client, state }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<EditorState> {
        self.state.subscribe()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> EditorState {
        self.state.borrow().clone()
    }

    fn update(&self, f: impl FnOnce(&mut EditorState)) {
        self.state.send_modify(f);
    }

    fn set_loading(&self, loading: bool) {
        self.update(|s| s.is_loading = loading);
    }

    // -----------------------------------------------------------------------
    // Template list & selection
    // -----------------------------------------------------------------------

    /// Reload the template list. Called on start-up and after each save.
    pub async fn refresh_templates(&self) {
        match self.client.list_templates().await {
            Ok(templates) => {
                tracing::debug!(count = templates.len(), "Fetched templates");
                self.update(|s| s.templates = templates);
            }
            Err(e) => tracing::error!(error = %e, "Error fetching templates"),
        }
    }

    /// Select a saved template, or `None` to start a new one.
    ///
    /// Starting a new template resets the draft without a service call.
    pub async fn select_template(&self, id: Option<DbId>) {
        self.update(|s| s.selected_template_id = id);

        let Some(id) = id else {
            self.update(|s| s.draft = TemplatePayload::blank());
            return;
        };

        self.set_loading(true);
        match self.client.get_template(id).await {
            Ok(template) => {
                tracing::debug!(template_id = id, "Loaded template");
                self.update(|s| s.draft = template.payload);
            }
            Err(e) => tracing::error!(template_id = id, error = %e, "Error loading template"),
        }
        self.set_loading(false);
    }

    // -----------------------------------------------------------------------
    // Draft edits
    // -----------------------------------------------------------------------

    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.update(|s| s.draft.title = Some(title));
    }

    pub fn set_content(&self, content: impl Into<String>) {
        let content = content.into();
        self.update(|s| s.draft.content = Some(content));
    }

    pub fn set_title_color(&self, color: impl Into<String>) {
        let color = color.into();
        self.update(|s| s.draft.styles_mut().title_color = Some(color));
    }

    pub fn set_font_size(&self, font_size: impl Into<String>) {
        let font_size = font_size.into();
        self.update(|s| s.draft.styles_mut().font_size = Some(font_size));
    }

    pub fn set_alignment(&self, alignment: Alignment) {
        self.update(|s| s.draft.styles_mut().alignment = Some(alignment));
    }

    pub fn toggle_color_picker(&self) {
        self.update(|s| s.show_color_picker = !s.show_color_picker);
    }

    pub fn close_color_picker(&self) {
        self.update(|s| s.show_color_picker = false);
    }

    /// Apply the end of a drag gesture to the section order.
    pub fn reorder_sections(&self, drag: DragResult) {
        self.state.send_if_modified(|s| section::apply_drag(&mut s.sections, drag));
    }

    /// Dismiss the last notice.
    pub fn clear_notice(&self) {
        self.update(|s| s.notice = None);
    }

    // -----------------------------------------------------------------------
    // Service actions
    // -----------------------------------------------------------------------

    /// Upload an image and point the draft at it.
    pub async fn upload_image(&self, filename: &str, bytes: Vec<u8>) {
        self.set_loading(true);
        match self.client.upload_image(filename, bytes).await {
            Ok(image_url) => {
                tracing::debug!(%image_url, "Image uploaded");
                self.update(|s| s.draft.image_url = Some(image_url));
            }
            Err(e) => tracing::error!(error = %e, "Error uploading image"),
        }
        self.set_loading(false);
    }

    /// Save the draft: update the selected template, or create a new one.
    pub async fn save(&self) {
        let (draft, selected) = {
            let s = self.state.borrow();
            (s.draft.clone(), s.selected_template_id)
        };

        self.set_loading(true);
        let result = match selected {
            Some(id) => self.client.update_template(id, &draft).await.map(|_| ()),
            None => self.client.create_template(&draft).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.refresh_templates().await;
                tracing::info!(template_id = ?selected, "Template saved");
                self.update(|s| s.notice = Some(SAVE_SUCCESS_NOTICE.to_string()));
            }
            Err(e) => tracing::error!(error = %e, "Error saving template"),
        }
        self.set_loading(false);
    }

    /// Render the draft through the service and package it for download.
    pub async fn download(&self) -> Option<HtmlDownload> {
        let draft = self.state.borrow().draft.clone();

        self.set_loading(true);
        let download = match self.client.render_template(&draft).await {
            Ok(html) => Some(HtmlDownload::new(html)),
            Err(e) => {
                tracing::error!(error = %e, "Error downloading template");
                None
            }
        };
        self.set_loading(false);
        download
    }
}
