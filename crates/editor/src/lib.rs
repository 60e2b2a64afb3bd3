//! Headless editor for composing email templates.
//!
//! [`Editor`](controller::Editor) owns the draft, the section order and the
//! UI flags, and talks to the template service through a
//! [`TemplateApi`](client::TemplateApi). View functions in [`view`] turn a
//! state snapshot into what the UI shows.

pub mod client;
pub mod controller;
pub mod download;
pub mod section;
pub mod state;
pub mod view;

pub use client::{ClientError, HttpTemplateClient, SavedTemplate, TemplateApi};
pub use controller::Editor;
pub use download::HtmlDownload;
pub use section::{DragResult, Section};
pub use state::EditorState;
