//! Domain logic shared by the template service and the editor.
//!
//! Holds the template payload types, the placeholder renderer, and the two
//! filesystem-backed components: the layout resolver and image storage.

pub mod error;
pub mod layout;
pub mod render;
pub mod storage;
pub mod template;
pub mod types;
